//! Page components for routing.

mod coming_soon;
mod game;
mod home;
mod login;
mod register;

pub use coming_soon::ComingSoon;
pub use game::Game;
pub use home::Home;
pub use login::Login;
pub use register::Register;
