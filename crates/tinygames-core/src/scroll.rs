//! Horizontal card scrolling
//!
//! Each section's card slot scrolls sideways. The arrows are only useful
//! when the cards overflow the slot, and each one hides itself at its own
//! end of the track. Everything here is derived from the current layout,
//! so it can be recomputed at any time without stored history.

use std::collections::BTreeMap;

use crate::sections::RenderedSection;

/// Rendered width of one game card, in CSS pixels
pub const CARD_WIDTH: f64 = 196.0;
/// Gap between adjacent cards, in CSS pixels
pub const CARD_GAP: f64 = 22.0;
/// Distance covered by one arrow click
pub const SCROLL_STEP: f64 = CARD_WIDTH + CARD_GAP;

/// Sub-pixel slack when deciding whether the track is at its right end.
const EDGE_TOLERANCE: f64 = 1.0;

/// Layout snapshot of a card slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset
    pub scroll_left: f64,
    /// Total width of the scrollable content
    pub scroll_width: f64,
    /// Visible width of the slot
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    pub fn max_scroll_left(&self) -> f64 {
        self.scroll_width - self.client_width
    }

    /// Content is wider than the viewport
    pub fn overflows(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

/// Visibility of the two arrows of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAffordanceState {
    pub left_visible: bool,
    pub right_visible: bool,
}

impl Default for ScrollAffordanceState {
    /// Freshly rendered sections start at offset zero: left hidden, right shown.
    fn default() -> Self {
        Self {
            left_visible: false,
            right_visible: true,
        }
    }
}

impl ScrollAffordanceState {
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            left_visible: metrics.scroll_left > 0.0,
            right_visible: metrics.scroll_left < metrics.max_scroll_left() - EDGE_TOLERANCE,
        }
    }
}

/// Arrow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    pub fn sign(&self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            ScrollDirection::Left => "Desplazar a la izquierda",
            ScrollDirection::Right => "Desplazar a la derecha",
        }
    }
}

/// Scroll state of one rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollController {
    scrollable: bool,
    affordances: ScrollAffordanceState,
}

impl ScrollController {
    /// Bind to a section. Returns `None` when the section lacks its card
    /// slot or either arrow.
    pub fn for_section(section: &RenderedSection) -> Option<Self> {
        if !section.controls.is_complete() {
            tracing::debug!(section = %section.title, "Section has no scroll controls");
            return None;
        }
        Some(Self {
            scrollable: false,
            affordances: ScrollAffordanceState::default(),
        })
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn affordances(&self) -> ScrollAffordanceState {
        self.affordances
    }

    /// CSS class toggled on the section box
    pub fn section_class(&self) -> &'static str {
        if self.scrollable {
            "is-scrollable"
        } else {
            ""
        }
    }

    /// Re-evaluate overflow after cards render or the window resizes.
    pub fn check_scrollable(&mut self, metrics: &ScrollMetrics) {
        self.scrollable = metrics.overflows();
        if self.scrollable {
            self.update_affordances(metrics);
        }
    }

    /// Recompute arrow visibility from the current scroll offset.
    pub fn update_affordances(&mut self, metrics: &ScrollMetrics) {
        self.affordances = ScrollAffordanceState::from_metrics(metrics);
    }

    /// Horizontal delta for one arrow click.
    pub fn scroll(&self, direction: ScrollDirection) -> f64 {
        SCROLL_STEP * direction.sign()
    }
}

/// Scroll controllers of the sections currently on the page, keyed by
/// section index. Owned by the page so a resize can fan out to every
/// section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollRegistry {
    controllers: BTreeMap<usize, ScrollController>,
}

impl ScrollRegistry {
    pub fn register(&mut self, index: usize, controller: ScrollController) {
        self.controllers.insert(index, controller);
    }

    pub fn unregister(&mut self, index: usize) -> Option<ScrollController> {
        self.controllers.remove(&index)
    }

    pub fn get(&self, index: usize) -> Option<&ScrollController> {
        self.controllers.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ScrollController> {
        self.controllers.get_mut(&index)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.controllers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Run `check_scrollable` on every registered section. Sections whose
    /// layout cannot be read are left untouched.
    pub fn on_resize(&mut self, mut metrics_for: impl FnMut(usize) -> Option<ScrollMetrics>) {
        for (index, controller) in self.controllers.iter_mut() {
            if let Some(metrics) = metrics_for(*index) {
                controller.check_scrollable(&metrics);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionControls;
    use crate::types::SECTIONS;

    fn controller() -> ScrollController {
        ScrollController::for_section(&RenderedSection::from_descriptor(&SECTIONS[0])).unwrap()
    }

    #[test]
    fn fresh_controller_matches_initial_markup() {
        let c = controller();
        assert!(!c.is_scrollable());
        assert!(!c.affordances().left_visible);
        assert!(c.affordances().right_visible);
    }

    #[test]
    fn incomplete_section_gets_no_controller() {
        let mut section = RenderedSection::from_descriptor(&SECTIONS[0]);
        section.controls = SectionControls {
            card_slot: true,
            left_arrow: false,
            right_arrow: true,
        };
        assert!(ScrollController::for_section(&section).is_none());
    }

    #[test]
    fn at_start_only_right_arrow_shows() {
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(0.0, 1744.0, 900.0));
        assert!(c.is_scrollable());
        assert_eq!(c.section_class(), "is-scrollable");
        assert_eq!(
            c.affordances(),
            ScrollAffordanceState {
                left_visible: false,
                right_visible: true
            }
        );
    }

    #[test]
    fn in_the_middle_both_arrows_show() {
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(218.0, 1744.0, 900.0));
        assert!(c.affordances().left_visible);
        assert!(c.affordances().right_visible);
    }

    #[test]
    fn fractional_rect_width_at_the_end_hides_right_arrow() {
        // Bounding-rect widths are fractional; the scroll offset rounds
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(843.0, 1744.0, 900.6));
        assert!(c.affordances().left_visible);
        assert!(!c.affordances().right_visible);
    }

    #[test]
    fn right_arrow_hides_within_one_pixel_of_end() {
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(843.4, 1744.0, 900.0));
        assert!(c.affordances().left_visible);
        assert!(!c.affordances().right_visible);
    }

    #[test]
    fn non_overflowing_slot_keeps_previous_arrows() {
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(100.0, 1744.0, 900.0));
        let before = c.affordances();

        c.check_scrollable(&ScrollMetrics::new(0.0, 800.0, 900.0));
        assert!(!c.is_scrollable());
        assert_eq!(c.section_class(), "");
        assert_eq!(c.affordances(), before);
    }

    #[test]
    fn scroll_moves_one_card_plus_gap() {
        let c = controller();
        assert_eq!(c.scroll(ScrollDirection::Right), 218.0);
        assert_eq!(c.scroll(ScrollDirection::Left), -218.0);
    }

    #[test]
    fn registry_fans_out_resize() {
        let mut registry = ScrollRegistry::default();
        registry.register(0, controller());
        registry.register(1, controller());
        registry.register(2, controller());

        registry.on_resize(|index| match index {
            0 => Some(ScrollMetrics::new(0.0, 1744.0, 600.0)),
            1 => Some(ScrollMetrics::new(0.0, 500.0, 600.0)),
            _ => None,
        });

        assert!(registry.get(0).unwrap().is_scrollable());
        assert!(!registry.get(1).unwrap().is_scrollable());
        assert!(!registry.get(2).unwrap().is_scrollable());
    }

    #[test]
    fn unregister_removes_controller() {
        let mut registry = ScrollRegistry::default();
        registry.register(3, controller());
        assert_eq!(registry.indices(), vec![3]);

        assert!(registry.unregister(3).is_some());
        assert!(registry.is_empty());
        assert!(registry.unregister(3).is_none());
    }
}
