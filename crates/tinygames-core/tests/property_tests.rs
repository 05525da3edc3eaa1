//! Property-based tests for scroll affordances and card distribution
//!
//! Uses proptest to verify invariants that must hold for any layout and any
//! listing.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tinygames_core::{
    premium_quota, CardBuilder, ContentContainer, ContentSectionBuilder, GameItem,
    RenderedSection, ScrollController, ScrollMetrics, SECTIONS,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Overflowing layout: content wider than the slot
fn overflowing_layout() -> impl Strategy<Value = (f64, f64)> {
    (100.0f64..2000.0, 1.0f64..3000.0)
        .prop_map(|(client_width, extra)| (client_width + extra, client_width))
}

fn game_list(max: usize) -> impl Strategy<Value = Vec<GameItem>> {
    prop::collection::vec(
        ("[a-z]{1,12}", "[A-Za-z ]{0,20}").prop_map(|(img, title)| GameItem::new(img, title)),
        1..max,
    )
}

fn controller() -> ScrollController {
    ScrollController::for_section(&RenderedSection::from_descriptor(&SECTIONS[0])).unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// At offset zero the left arrow is always hidden
    #[test]
    fn left_hidden_at_start((scroll_width, client_width) in overflowing_layout()) {
        let mut c = controller();
        c.check_scrollable(&ScrollMetrics::new(0.0, scroll_width, client_width));
        prop_assert!(c.is_scrollable());
        prop_assert!(!c.affordances().left_visible);
    }

    /// Anywhere within a pixel of the right end hides the right arrow
    #[test]
    fn right_hidden_at_end(
        (scroll_width, client_width) in overflowing_layout(),
        slack in 0.0f64..1.0,
    ) {
        let mut c = controller();
        let max = scroll_width - client_width;
        c.check_scrollable(&ScrollMetrics::new(max - slack, scroll_width, client_width));
        prop_assert!(!c.affordances().right_visible);
        prop_assert!(c.affordances().left_visible);
    }

    /// Visibility depends only on the current layout
    #[test]
    fn affordances_are_idempotent(
        (scroll_width, client_width) in overflowing_layout(),
        fraction in 0.0f64..=1.0,
    ) {
        let metrics = ScrollMetrics::new(
            fraction * (scroll_width - client_width),
            scroll_width,
            client_width,
        );
        let mut a = controller();
        a.check_scrollable(&metrics);
        let once = a.affordances();
        a.check_scrollable(&metrics);
        a.update_affordances(&metrics);
        prop_assert_eq!(a.affordances(), once);
    }

    /// Every section gets min(8, n) cards and exactly its quota of premium
    /// cards, all at the front
    #[test]
    fn premium_quota_holds(games in game_list(30), seed in any::<u64>()) {
        let mut container = ContentContainer::default();
        ContentSectionBuilder::build(Some(&mut container), &SECTIONS);
        let mut rng = StdRng::seed_from_u64(seed);
        CardBuilder::default().generate(container.sections_mut(), &games, &mut rng);

        for section in container.sections() {
            let len = games.len().min(8);
            prop_assert_eq!(section.cards.len(), len);

            let quota = if section.all_premium { len } else { premium_quota(&section.title).min(len) };
            prop_assert_eq!(section.premium_card_count(), quota);
            prop_assert!(section.cards.iter().take(quota).all(|c| c.premium));

            for card in &section.cards {
                prop_assert!(games.contains(&card.game));
            }
        }
    }
}
