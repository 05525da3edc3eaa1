//! Home page - the game sections.
//!
//! Composition happens in two stages: the section skeletons render
//! immediately, then the game listing is fetched once and the card slots
//! are filled. An empty listing leaves the sections without cards.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use tinygames_core::{
    CardBuilder, ContentContainer, ContentSectionBuilder, RemoteFeedAdapter, ScrollController,
    ScrollRegistry, SECTIONS,
};

use crate::components::{refresh_scrollables, CardSlots, ContentBox, PageShell};
use crate::context::get_config;

/// Window property holding the page's resize handler
const RESIZE_HANDLER: &str = "__tinygamesResize";

/// Install the resize handler, replacing one left by an earlier mount.
fn listen_resize_script() -> String {
    format!(
        "{unlisten} window.{RESIZE_HANDLER} = () => dioxus.send(true); \
         window.addEventListener('resize', window.{RESIZE_HANDLER});",
        unlisten = unlisten_resize_script()
    )
}

/// Remove the resize handler, if installed.
fn unlisten_resize_script() -> String {
    format!(
        "if (window.{RESIZE_HANDLER}) {{ \
         window.removeEventListener('resize', window.{RESIZE_HANDLER}); \
         delete window.{RESIZE_HANDLER}; }}"
    )
}

fn render_sections() -> ContentContainer {
    let mut container = ContentContainer::default();
    ContentSectionBuilder::build(Some(&mut container), &SECTIONS);
    container
}

/// One scroll controller per section that has the scroll controls.
fn register_scrollers(container: &ContentContainer) -> ScrollRegistry {
    let mut registry = ScrollRegistry::default();
    for (index, section) in container.sections().iter().enumerate() {
        if let Some(controller) = ScrollController::for_section(section) {
            registry.register(index, controller);
        }
    }
    registry
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut container = use_signal(render_sections);
    let registry = use_signal(move || register_scrollers(&container.peek()));
    let slots: CardSlots = use_signal(BTreeMap::new);

    // Fetch once, then fill the card slots
    use_future(move || async move {
        let config = get_config();
        let games = RemoteFeedAdapter::with_url(config.feed_url).fetch_games().await;
        if games.is_empty() {
            tracing::warn!("No games available, sections stay empty");
        }
        CardBuilder::new(config.cards_per_section).generate(
            container.write().sections_mut(),
            &games,
            &mut rand::rng(),
        );
    });

    // Re-check overflow once the cards are on screen
    use_effect(move || {
        let _ = container.read();
        spawn(refresh_scrollables(slots, registry));
    });

    // Resize fan-out to every section
    use_future(move || async move {
        let mut resize = document::eval(&listen_resize_script());
        while resize.recv::<bool>().await.is_ok() {
            refresh_scrollables(slots, registry).await;
        }
    });

    use_drop(|| {
        tracing::debug!("Home dropped, removing resize handler");
        let _ = document::eval(&unlisten_resize_script());
    });

    rsx! {
        PageShell {
            main { class: "content-container",
                for (index, section) in container.read().sections().iter().enumerate() {
                    ContentBox {
                        key: "{index}",
                        index: index,
                        section: section.clone(),
                        registry: registry,
                        slots: slots,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_handler_is_replaced_not_stacked() {
        let listen = listen_resize_script();
        let remove_at = listen.find("removeEventListener").unwrap();
        let add_at = listen.find("addEventListener('resize'").unwrap();
        assert!(remove_at < add_at);
        assert!(listen.contains("window.__tinygamesResize = () => dioxus.send(true);"));
    }

    #[test]
    fn unlisten_removes_the_same_handler() {
        let unlisten = unlisten_resize_script();
        assert!(unlisten.contains("removeEventListener('resize', window.__tinygamesResize)"));
        assert!(unlisten.contains("delete window.__tinygamesResize"));
    }

    #[test]
    fn every_section_gets_a_scroller() {
        let container = render_sections();
        let registry = register_scrollers(&container);
        assert_eq!(registry.len(), container.len());
    }
}
