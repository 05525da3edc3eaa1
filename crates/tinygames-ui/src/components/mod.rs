//! Reusable form components

mod button;
mod input;
mod loading_overlay;
mod password_field;

pub use button::*;
pub use input::*;
pub use loading_overlay::*;
pub use password_field::*;
