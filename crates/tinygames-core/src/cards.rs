//! Game card distribution
//!
//! Every section draws its own shuffle of the whole listing, so the same
//! game can show up in several rows, premium in one and regular in another.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::sections::RenderedSection;
use crate::types::{GameCard, GameItem};

/// Cards rendered per section
pub const CARDS_PER_SECTION: usize = 8;

/// How many leading cards of a section are premium, by exact visible title.
pub fn premium_quota(title: &str) -> usize {
    match title {
        "Para Ti" => 3,
        "Juegos Online" => 2,
        "Juegos de 2 Jugadores" => 5,
        _ => 0,
    }
}

/// Fills section card slots from a game listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBuilder {
    cards_per_section: usize,
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self {
            cards_per_section: CARDS_PER_SECTION,
        }
    }
}

impl CardBuilder {
    pub fn new(cards_per_section: usize) -> Self {
        Self { cards_per_section }
    }

    pub fn cards_per_section(&self) -> usize {
        self.cards_per_section
    }

    /// Replace the card slot of every section with freshly shuffled cards.
    ///
    /// Does nothing when there is no section with a card slot or no items.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sections: &mut [RenderedSection],
        items: &[GameItem],
        rng: &mut R,
    ) {
        let slots = sections.iter().filter(|s| s.controls.card_slot).count();
        if slots == 0 || items.is_empty() {
            tracing::debug!(slots, items = items.len(), "Nothing to render, skipping cards");
            return;
        }

        let mut pool = items.to_vec();

        for section in sections.iter_mut().filter(|s| s.controls.card_slot) {
            pool.shuffle(rng);

            let premium_count = if section.all_premium {
                self.cards_per_section
            } else {
                premium_quota(&section.title)
            };

            section.cards = pool
                .iter()
                .take(self.cards_per_section)
                .enumerate()
                .map(|(index, game)| GameCard {
                    game: game.clone(),
                    premium: index < premium_count,
                })
                .collect();

            tracing::trace!(
                section = %section.title,
                cards = section.cards.len(),
                premium = section.premium_card_count(),
                "Generated cards"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{ContentContainer, ContentSectionBuilder};
    use crate::types::SECTIONS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn games(n: usize) -> Vec<GameItem> {
        (0..n)
            .map(|i| GameItem::new(format!("img-{i}.png"), format!("Game {i}")))
            .collect()
    }

    fn rendered() -> ContentContainer {
        let mut container = ContentContainer::default();
        ContentSectionBuilder::build(Some(&mut container), &SECTIONS);
        container
    }

    #[test]
    fn quota_table_lookup() {
        assert_eq!(premium_quota("Para Ti"), 3);
        assert_eq!(premium_quota("Juegos Online"), 2);
        assert_eq!(premium_quota("Juegos de 2 Jugadores"), 5);
        assert_eq!(premium_quota("Juegos Premium"), 0);
        assert_eq!(premium_quota("para ti"), 0);
    }

    #[test]
    fn premium_flags_follow_quota() {
        let mut container = rendered();
        let mut rng = StdRng::seed_from_u64(7);
        CardBuilder::default().generate(container.sections_mut(), &games(20), &mut rng);

        let sections = container.sections();
        for (section, expected) in sections.iter().zip([3, 8, 2, 5]) {
            assert_eq!(section.cards.len(), 8);
            assert_eq!(section.premium_card_count(), expected, "{}", section.title);
            // Premium cards come first in shuffled order
            let flags: Vec<bool> = section.cards.iter().map(|c| c.premium).collect();
            assert!(flags.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn short_listing_fills_what_it_can() {
        let mut container = rendered();
        let mut rng = StdRng::seed_from_u64(1);
        CardBuilder::default().generate(container.sections_mut(), &games(2), &mut rng);

        let para_ti = &container.sections()[0];
        assert_eq!(para_ti.cards.len(), 2);
        assert_eq!(para_ti.premium_card_count(), 2);
    }

    #[test]
    fn empty_items_is_a_no_op() {
        let mut container = rendered();
        let before = container.clone();
        CardBuilder::default().generate(container.sections_mut(), &[], &mut rand::rng());
        assert_eq!(container, before);
    }

    #[test]
    fn no_sections_is_a_no_op() {
        let mut sections: Vec<RenderedSection> = Vec::new();
        CardBuilder::default().generate(&mut sections, &games(5), &mut rand::rng());
        assert!(sections.is_empty());
    }

    #[test]
    fn sections_without_card_slot_are_skipped() {
        let mut container = rendered();
        container.sections_mut()[0].controls.card_slot = false;
        CardBuilder::default().generate(container.sections_mut(), &games(10), &mut rand::rng());

        assert!(container.sections()[0].cards.is_empty());
        assert_eq!(container.sections()[1].cards.len(), 8);
    }

    #[test]
    fn items_may_repeat_across_sections() {
        let mut container = rendered();
        let mut rng = StdRng::seed_from_u64(3);
        // Four sections of eight cards from a pool of eight forces repetition
        CardBuilder::default().generate(container.sections_mut(), &games(8), &mut rng);

        let mut expected: Vec<String> = games(8).into_iter().map(|g| g.title).collect();
        expected.sort();

        for section in container.sections() {
            let mut titles: Vec<String> =
                section.cards.iter().map(|c| c.game.title.clone()).collect();
            titles.sort();
            assert_eq!(titles, expected);
        }
    }

    #[test]
    fn regenerate_replaces_cards() {
        let mut container = rendered();
        let builder = CardBuilder::new(4);
        builder.generate(container.sections_mut(), &games(10), &mut rand::rng());
        builder.generate(container.sections_mut(), &[GameItem::default()], &mut rand::rng());

        let para_ti = &container.sections()[0];
        assert_eq!(para_ti.cards.len(), 1);
        assert_eq!(para_ti.cards[0].game, GameItem::default());
    }
}
