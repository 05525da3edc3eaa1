//! Loading Overlay
//!
//! Full-screen animation shown between a valid form submit and the redirect
//! to the home page.

use dioxus::prelude::*;

#[component]
pub fn LoadingOverlay(active: bool) -> Element {
    rsx! {
        div {
            id: "loadingScreen",
            class: if active { "loading-screen active" } else { "loading-screen" },
            "aria-hidden": if active { "false" } else { "true" },
            div { class: "loading-spinner" }
            p { class: "loading-text", "Cargando..." }
        }
    }
}
