//! Core types for the TinyGames home page

use serde::{Deserialize, Serialize};

/// Crown image shown next to premium section titles and on premium cards.
pub const PREMIUM_ICON: &str = "assets/logo-premium.png";

/// A game as the card renderer consumes it.
///
/// Serialized as `{ "imagen": ..., "titulo": ... }`. Either field may be
/// empty when the listing entry lacked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameItem {
    #[serde(rename = "imagen")]
    pub image_url: String,
    #[serde(rename = "titulo")]
    pub title: String,
}

impl GameItem {
    pub fn new(image_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            title: title.into(),
        }
    }
}

/// Background variant of a content section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionStyle {
    Primary,
    Secondary,
}

impl SectionStyle {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            SectionStyle::Primary => "box-color-1",
            SectionStyle::Secondary => "box-color-2",
        }
    }
}

/// Static description of one home page row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub title: &'static str,
    pub style: SectionStyle,
    /// Every card in this row is premium and the header carries the crown.
    pub all_premium: bool,
}

/// The rows of the home page, in document order.
pub const SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        title: "Para Ti",
        style: SectionStyle::Primary,
        all_premium: false,
    },
    SectionDescriptor {
        title: "Juegos Premium",
        style: SectionStyle::Secondary,
        all_premium: true,
    },
    SectionDescriptor {
        title: "Juegos Online",
        style: SectionStyle::Primary,
        all_premium: false,
    },
    SectionDescriptor {
        title: "Juegos de 2 Jugadores",
        style: SectionStyle::Secondary,
        all_premium: false,
    },
];

/// A rendered game card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub game: GameItem,
    pub premium: bool,
}

impl GameCard {
    /// Alt text for the cover image
    pub fn alt_text(&self) -> String {
        format!("Imagen de {}", self.game.title)
    }

    /// Returns the CSS class list for the card
    pub fn class(&self) -> &'static str {
        if self.premium {
            "game-card game-card--premium"
        } else {
            "game-card"
        }
    }
}
