//! Site Header Component
//!
//! Hamburger button with the slide-in side menu, logo, and avatar button
//! with the user-account popover.

use dioxus::prelude::*;
use tinygames_core::{ClickTarget, MenuKind};

use crate::app::Route;
use crate::context::{use_click_target, use_menus};

/// Site header with both menus
#[component]
pub fn SiteHeader() -> Element {
    let mut menus = use_menus();
    let mut click_target = use_click_target();

    let side = menus.read().state(MenuKind::Side).unwrap_or_default();
    let user = menus.read().state(MenuKind::User).unwrap_or_default();

    let mut on_trigger = move |kind: MenuKind| {
        menus.write().toggle(kind);
        click_target.set(ClickTarget::Trigger(kind));
    };

    rsx! {
        header { class: "header",
            button {
                r#type: "button",
                class: "header__hamburger",
                "aria-label": "Abrir menú",
                "aria-controls": MenuKind::Side.panel_id(),
                "aria-expanded": side.aria_expanded(),
                onclick: move |_| on_trigger(MenuKind::Side),

                span { class: "header__hamburger-line" }
                span { class: "header__hamburger-line" }
                span { class: "header__hamburger-line" }
            }

            Link { to: Route::Home {}, class: "header__logo",
                img { src: "assets/logo.png", alt: "TinyGames" }
            }

            button {
                r#type: "button",
                class: "header__avatar",
                "aria-label": "Cuenta de usuario",
                "aria-controls": MenuKind::User.panel_id(),
                "aria-expanded": user.aria_expanded(),
                onclick: move |_| on_trigger(MenuKind::User),

                img { src: "assets/avatar.png", alt: "" }
            }
        }

        nav {
            id: MenuKind::Side.panel_id(),
            class: "side-menu",
            hidden: side.panel_hidden(),
            "aria-hidden": side.aria_hidden(),
            onclick: move |_| click_target.set(ClickTarget::Panel(MenuKind::Side)),

            ul { class: "side-menu__list",
                li { Link { to: Route::Home {}, class: "side-menu__link", "Inicio" } }
                li { Link { to: Route::ComingSoon {}, class: "side-menu__link", "Categorías" } }
                li { Link { to: Route::ComingSoon {}, class: "side-menu__link", "Juegos Premium" } }
                li { Link { to: Route::ComingSoon {}, class: "side-menu__link", "Favoritos" } }
            }
        }

        div {
            id: MenuKind::User.panel_id(),
            class: "user-menu",
            hidden: user.panel_hidden(),
            "aria-hidden": user.aria_hidden(),
            onclick: move |_| click_target.set(ClickTarget::Panel(MenuKind::User)),

            Link { to: Route::ComingSoon {}, class: "user-menu__link", "Mi perfil" }
            Link { to: Route::Register {}, class: "user-menu__link", "Registrarse" }
            Link { to: Route::Login {}, class: "user-menu__link", "Cerrar sesión" }
        }
    }
}
