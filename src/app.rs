use dioxus::prelude::*;

use crate::pages::{ComingSoon, Game, Home, Login, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the game sections
/// - `/juego` - Game detail page
/// - `/login` - Login form
/// - `/registro` - Registration form
/// - `/proximamente` - Placeholder for pages that do not exist yet
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/juego")]
    Game {},
    #[route("/login")]
    Login {},
    #[route("/registro")]
    Register {},
    #[route("/proximamente")]
    ComingSoon {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
