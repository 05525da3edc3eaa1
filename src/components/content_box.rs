//! Content Box Component
//!
//! One home page section: header, horizontally scrolling card slot and the
//! two arrows. The section's scroll state lives in the page's
//! [`ScrollRegistry`]; this component reads it, feeds it layout on scroll,
//! and unregisters itself when dropped.

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;
use tinygames_core::types::PREMIUM_ICON;
use tinygames_core::{RenderedSection, ScrollDirection, ScrollMetrics, ScrollRegistry};

use crate::app::Route;
use crate::components::GameCardView;

/// Mounted card slots by section index
pub type CardSlots = Signal<BTreeMap<usize, Rc<MountedData>>>;

/// Read the scroll layout of a mounted card slot.
///
/// The visible width comes from the bounding rect, which can be fractional
/// and includes borders, unlike `clientWidth`. Card slots have no border
/// and the 1 px edge tolerance absorbs the rounding.
pub async fn read_metrics(element: &MountedData) -> Option<ScrollMetrics> {
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let rect = element.get_client_rect().await.ok()?;
    Some(ScrollMetrics::new(offset.x, size.width, rect.size.width))
}

/// Re-run `check_scrollable` for every mounted section.
///
/// Used after cards render and on every window resize.
pub async fn refresh_scrollables(slots: CardSlots, mut registry: Signal<ScrollRegistry>) {
    let mounted: Vec<(usize, Rc<MountedData>)> = slots
        .peek()
        .iter()
        .map(|(index, element)| (*index, element.clone()))
        .collect();

    let mut metrics = BTreeMap::new();
    for (index, element) in mounted {
        if let Some(m) = read_metrics(&element).await {
            metrics.insert(index, m);
        }
    }

    registry.write().on_resize(|index| metrics.get(&index).copied());
}

fn card_slot_id(index: usize) -> String {
    format!("cards-{index}")
}

fn scroll_card_slot(index: usize, delta: f64) {
    let _ = document::eval(&format!(
        "document.getElementById('{}')?.scrollBy({{ left: {}, behavior: 'smooth' }});",
        card_slot_id(index),
        delta
    ));
}

#[derive(Props, Clone, PartialEq)]
pub struct ContentBoxProps {
    /// Position of the section on the page
    pub index: usize,
    pub section: RenderedSection,
    pub registry: Signal<ScrollRegistry>,
    pub slots: CardSlots,
}

#[component]
pub fn ContentBox(props: ContentBoxProps) -> Element {
    let index = props.index;
    let mut registry = props.registry;
    let mut slots = props.slots;

    use_drop(move || {
        if let Ok(mut registry) = registry.try_write() {
            registry.unregister(index);
        }
        if let Ok(mut slots) = slots.try_write() {
            slots.remove(&index);
        }
    });

    let controller = registry.read().get(index).copied();
    let affordances = controller.map(|c| c.affordances()).unwrap_or_default();
    let box_class = match controller.map(|c| c.section_class()) {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.section.class(), extra),
        _ => props.section.class(),
    };

    let on_mounted = move |element: Event<MountedData>| {
        slots.write().insert(index, element.data());
        spawn(refresh_scrollables(slots, registry));
    };

    let on_scroll = move |_: Event<ScrollData>| {
        let element = slots.peek().get(&index).cloned();
        spawn(async move {
            let Some(element) = element else { return };
            if let Some(metrics) = read_metrics(&element).await {
                if let Some(controller) = registry.write().get_mut(index) {
                    controller.update_affordances(&metrics);
                }
            }
        });
    };

    let on_arrow = move |direction: ScrollDirection| {
        let delta = registry.peek().get(index).map(|c| c.scroll(direction));
        if let Some(delta) = delta {
            scroll_card_slot(index, delta);
        }
    };

    rsx! {
        div { class: "{box_class}",
            div { class: "content-box__header",
                h2 { class: "content-box__title",
                    "{props.section.title}"
                    if props.section.shows_premium_icon() {
                        img { src: PREMIUM_ICON, alt: "Premium", class: "title-icon" }
                    }
                }
                Link { to: Route::ComingSoon {}, class: "content-box__see-all", "Ver todos" }
            }

            div {
                id: card_slot_id(index),
                class: "cards-container",
                onmounted: on_mounted,
                onscroll: on_scroll,

                for (position, card) in props.section.cards.iter().enumerate() {
                    GameCardView { key: "{position}", card: card.clone() }
                }
            }

            if props.section.controls.left_arrow {
                button {
                    r#type: "button",
                    class: "scroll-arrow scroll-arrow--left",
                    "aria-label": ScrollDirection::Left.aria_label(),
                    hidden: !affordances.left_visible,
                    onclick: move |_| on_arrow(ScrollDirection::Left),
                    "‹"
                }
            }
            if props.section.controls.right_arrow {
                button {
                    r#type: "button",
                    class: "scroll-arrow scroll-arrow--right",
                    "aria-label": ScrollDirection::Right.aria_label(),
                    hidden: !affordances.right_visible,
                    onclick: move |_| on_arrow(ScrollDirection::Right),
                    "›"
                }
            }
        }
    }
}
