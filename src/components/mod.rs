//! UI Components for TinyGames.

mod content_box;
mod game_card;
mod page_shell;
mod site_header;

pub use content_box::{refresh_scrollables, CardSlots, ContentBox};
pub use game_card::GameCardView;
pub use page_shell::PageShell;
pub use site_header::SiteHeader;
