//! TinyGames UI Components
//!
//! Dioxus form components shared by the login and registration pages.
//!
//! Fields render their [`tinygames_core::FieldState`] as a CSS class on the
//! input (`valid` / `error`); the rules deciding that state live in
//! `tinygames_core::forms`.

pub mod components;

pub use components::*;
