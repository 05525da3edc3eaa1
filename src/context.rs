//! Page context for TinyGames.
//!
//! Every page is wrapped in a `PageShell`, which provides the header menu
//! state and the click target of the event currently bubbling to the page
//! root.
//!
//! ## Usage
//!
//! ```ignore
//! // In a trigger inside the shell
//! let mut menus = use_menus();
//! let mut click_target = use_click_target();
//! menus.write().toggle(MenuKind::User);
//! click_target.set(ClickTarget::Trigger(MenuKind::User));
//! ```

use dioxus::prelude::*;
use tinygames_core::{ClickTarget, MenuController, SiteConfig};

/// Get the site configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> SiteConfig {
    crate::get_config()
}

/// Hook to access the header menus of the current page.
pub fn use_menus() -> Signal<MenuController> {
    use_context::<Signal<MenuController>>()
}

/// Hook to access the click target of the current click.
///
/// Handlers on triggers and panels record themselves here while the click
/// bubbles; the page root reads it to decide what counts as outside.
pub fn use_click_target() -> Signal<ClickTarget> {
    use_context::<Signal<ClickTarget>>()
}
