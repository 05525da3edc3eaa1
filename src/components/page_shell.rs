//! Page Shell Component
//!
//! Root wrapper of every page. Owns the header menu state and implements
//! the "click anywhere else closes the menu" behaviour.

use dioxus::prelude::*;
use tinygames_core::{ClickTarget, MenuController};

use crate::components::SiteHeader;

#[derive(Props, Clone, PartialEq)]
pub struct PageShellProps {
    /// Render the site header (login has none)
    #[props(default = true)]
    pub header: bool,
    /// Called for every click that reaches the page root
    #[props(default)]
    pub on_click: Option<EventHandler<()>>,
    /// Click-target signal owned by the page, for page controls that live
    /// outside the header
    #[props(default)]
    pub click_target: Option<Signal<ClickTarget>>,
    pub children: Element,
}

/// Page wrapper
///
/// Clicks bubble from the clicked element up to the root div. Triggers and
/// panels record themselves in the click-target context on the way, so by
/// the time the root handler runs it knows whether the click was outside
/// each menu.
#[component]
pub fn PageShell(props: PageShellProps) -> Element {
    let header = props.header;
    let mut menus = use_signal(move || MenuController::with_bindings(header, header));
    let own_target = use_signal(|| ClickTarget::Elsewhere);
    let mut click_target = props.click_target.unwrap_or(own_target);

    use_context_provider(|| menus);
    use_context_provider(|| click_target);

    rsx! {
        div {
            class: "page",
            onclick: move |_| {
                let target = click_target();
                menus.write().close_on_outside_click(target);
                click_target.set(ClickTarget::Elsewhere);

                if let Some(handler) = &props.on_click {
                    handler.call(());
                }
            },

            if props.header {
                SiteHeader {}
            }

            {props.children}
        }
    }
}
