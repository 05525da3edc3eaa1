//! Game page - details of a single game.
//!
//! The action bar jumps to the instructions and comments sections and opens
//! the share popover.

use std::rc::Rc;

use dioxus::prelude::*;
use tinygames_core::{ClickTarget, Popover};

use crate::app::Route;
use crate::components::PageShell;

fn smooth_scroll_to(target: Signal<Option<Rc<MountedData>>>) {
    let Some(element) = target.peek().clone() else {
        return;
    };
    spawn(async move {
        if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
            tracing::debug!(error = ?e, "Smooth scroll failed");
        }
    });
}

#[component]
pub fn Game() -> Element {
    let mut share = use_signal(Popover::default);
    let mut share_click = use_signal(|| false);
    let mut click_target = use_signal(|| ClickTarget::Elsewhere);
    let mut how_to_play: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut comments: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    rsx! {
        PageShell {
            click_target: click_target,
            // The share button and popover mark the click as inside before
            // it reaches the page root
            on_click: move |_| {
                let inside = share_click();
                share.write().close_on_outside_click(inside);
                share_click.set(false);
            },

            main { class: "game-page",
                section { class: "game-hero",
                    div { class: "game-hero__frame",
                        img { src: "assets/juego-portada.png", alt: "Portada del juego" }
                        Link { to: Route::ComingSoon {}, class: "game-hero__play", "Jugar" }
                    }
                    h1 { class: "game-hero__title", "Peg Solitaire" }
                }

                div { class: "game-actions",
                    button {
                        id: "btn-instructions",
                        r#type: "button",
                        class: "game-actions__button",
                        onclick: move |_| smooth_scroll_to(how_to_play),
                        "Instrucciones"
                    }
                    button {
                        id: "btn-comment",
                        r#type: "button",
                        class: "game-actions__button",
                        onclick: move |_| smooth_scroll_to(comments),
                        "Comentarios"
                    }
                    div { class: "share",
                        button {
                            id: "btn-share",
                            r#type: "button",
                            class: "game-actions__button",
                            onclick: move |_| {
                                share.write().toggle();
                                share_click.set(true);
                                click_target.set(ClickTarget::Contained);
                            },
                            "Compartir"
                        }
                        div {
                            id: "share-menu",
                            class: "share-menu",
                            hidden: !share.read().is_open(),
                            onclick: move |_| share_click.set(true),
                            a { class: "share-menu__link", href: "https://wa.me/", "WhatsApp" }
                            a { class: "share-menu__link", href: "https://twitter.com/intent/tweet", "X" }
                            a { class: "share-menu__link", href: "https://www.facebook.com/sharer/sharer.php", "Facebook" }
                        }
                    }
                }

                section {
                    id: "howToPlay",
                    class: "game-section",
                    onmounted: move |element: Event<MountedData>| how_to_play.set(Some(element.data())),
                    h2 { class: "game-section__title", "Cómo jugar" }
                    p {
                        "Salta una ficha sobre otra adyacente hacia un hueco vacío para retirarla. "
                        "Gana quien deje una sola ficha en el centro del tablero."
                    }
                }

                section {
                    id: "comments-section",
                    class: "game-section",
                    onmounted: move |element: Event<MountedData>| comments.set(Some(element.data())),
                    h2 { class: "game-section__title", "Comentarios" }
                    p { class: "game-section__empty", "Todavía no hay comentarios." }
                }
            }
        }
    }
}
