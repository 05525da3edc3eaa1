//! Content sections
//!
//! A section is one titled row on the home page: a header (with a crown when
//! the whole row is premium), a "Ver todos" link, the card slot that
//! [`crate::CardBuilder`] fills, and the two scroll arrows.

use crate::types::{GameCard, SectionDescriptor, SectionStyle};

/// Which interactive parts a rendered section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionControls {
    pub card_slot: bool,
    pub left_arrow: bool,
    pub right_arrow: bool,
}

impl SectionControls {
    /// Card slot and both arrows present
    pub fn complete() -> Self {
        Self {
            card_slot: true,
            left_arrow: true,
            right_arrow: true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.card_slot && self.left_arrow && self.right_arrow
    }
}

/// One section as currently rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    /// Visible title, used to look up the premium quota
    pub title: String,
    pub style: SectionStyle,
    pub all_premium: bool,
    /// Card slot contents; empty until cards are generated
    pub cards: Vec<GameCard>,
    pub controls: SectionControls,
}

impl RenderedSection {
    pub fn from_descriptor(descriptor: &SectionDescriptor) -> Self {
        Self {
            title: descriptor.title.to_string(),
            style: descriptor.style,
            all_premium: descriptor.all_premium,
            cards: Vec::new(),
            controls: SectionControls::complete(),
        }
    }

    /// Returns the CSS class list for the section box
    pub fn class(&self) -> String {
        if self.all_premium {
            format!("content-box {} content-box--premium", self.style.class())
        } else {
            format!("content-box {}", self.style.class())
        }
    }

    /// Whether the header shows the crown icon
    pub fn shows_premium_icon(&self) -> bool {
        self.all_premium
    }

    pub fn premium_card_count(&self) -> usize {
        self.cards.iter().filter(|c| c.premium).count()
    }
}

/// Holds the sections currently rendered on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentContainer {
    sections: Vec<RenderedSection>,
}

impl ContentContainer {
    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [RenderedSection] {
        &mut self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// Renders the section skeletons into a container.
pub struct ContentSectionBuilder;

impl ContentSectionBuilder {
    /// Replace the container's contents with one empty section per descriptor.
    ///
    /// Calling this again discards whatever was rendered before, cards
    /// included. A missing container is logged and otherwise ignored.
    pub fn build(container: Option<&mut ContentContainer>, descriptors: &[SectionDescriptor]) {
        let Some(container) = container else {
            tracing::error!("Content container not found, skipping section render");
            return;
        };

        container.sections = descriptors
            .iter()
            .map(RenderedSection::from_descriptor)
            .collect();

        tracing::debug!(count = container.sections.len(), "Rendered content sections");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameItem, SECTIONS};

    #[test]
    fn build_renders_every_descriptor_in_order() {
        let mut container = ContentContainer::default();
        ContentSectionBuilder::build(Some(&mut container), &SECTIONS);

        let titles: Vec<_> = container.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Para Ti", "Juegos Premium", "Juegos Online", "Juegos de 2 Jugadores"]
        );
        assert!(container
            .sections()
            .iter()
            .all(|s| s.cards.is_empty() && s.controls.is_complete()));
    }

    #[test]
    fn premium_section_gets_class_and_icon() {
        let mut container = ContentContainer::default();
        ContentSectionBuilder::build(Some(&mut container), &SECTIONS);

        let premium = &container.sections()[1];
        assert_eq!(premium.class(), "content-box box-color-2 content-box--premium");
        assert!(premium.shows_premium_icon());

        let regular = &container.sections()[0];
        assert_eq!(regular.class(), "content-box box-color-1");
        assert!(!regular.shows_premium_icon());
    }

    #[test]
    fn rebuild_overwrites_previous_output() {
        let mut container = ContentContainer::default();
        ContentSectionBuilder::build(Some(&mut container), &SECTIONS);
        container.sections_mut()[0].cards.push(GameCard {
            game: GameItem::new("a.png", "Foo"),
            premium: false,
        });

        ContentSectionBuilder::build(Some(&mut container), &SECTIONS[..2]);
        assert_eq!(container.len(), 2);
        assert!(container.sections()[0].cards.is_empty());
    }

    #[test]
    fn missing_container_is_tolerated() {
        ContentSectionBuilder::build(None, &SECTIONS);
    }
}
