//! Placeholder for sections of the site that are not built yet.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageShell;

#[component]
pub fn ComingSoon() -> Element {
    rsx! {
        PageShell {
            main { class: "coming-soon",
                h1 { class: "coming-soon__title", "Próximamente" }
                p { class: "coming-soon__text", "Estamos trabajando en esta sección." }
                Link { to: Route::Home {}, class: "btn-primary", "Volver al inicio" }
            }
        }
    }
}
