//! Game Card Component

use dioxus::prelude::*;
use tinygames_core::types::PREMIUM_ICON;
use tinygames_core::GameCard;

use crate::app::Route;

/// Where a card's "Jugar" button leads; the games are not playable yet
fn play_route() -> Route {
    Route::ComingSoon {}
}

/// A single game card: cover, title, play button, and the crown badge on
/// premium cards.
#[component]
pub fn GameCardView(card: GameCard) -> Element {
    rsx! {
        div { class: card.class(),
            if card.premium {
                div { class: "game-card__premium-badge",
                    img { src: PREMIUM_ICON, alt: "Premium" }
                }
            }
            img {
                src: "{card.game.image_url}",
                alt: card.alt_text(),
                class: "game-card__image",
            }
            h3 { class: "game-card__title", "{card.game.title}" }
            Link { to: play_route(), class: "game-card__button", "Jugar" }
        }
    }
}
