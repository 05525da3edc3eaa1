//! TinyGames Core Library
//!
//! State and rules behind the TinyGames casual-games site.
//!
//! ## Overview
//!
//! The home page is composed in two stages: the [`feed`] fetches a game
//! listing (degrading to an empty list on any failure), then the
//! [`sections`] and [`cards`] builders turn that list into titled rows of
//! game cards. Each row gets a [`scroll::ScrollController`] that derives the
//! visibility of its left/right arrows from the current layout.
//!
//! The header menus ([`menu`]) and the login/registration rules ([`forms`])
//! are independent of that pipeline.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tinygames_core::{CardBuilder, ContentContainer, ContentSectionBuilder, RemoteFeedAdapter, SECTIONS};
//!
//! let games = RemoteFeedAdapter::new().fetch_games().await;
//!
//! let mut container = ContentContainer::default();
//! ContentSectionBuilder::build(Some(&mut container), &SECTIONS);
//! CardBuilder::default().generate(container.sections_mut(), &games, &mut rand::rng());
//! ```

pub mod cards;
pub mod config;
pub mod error;
pub mod feed;
pub mod forms;
pub mod menu;
pub mod scroll;
pub mod sections;
pub mod types;

// Re-exports
pub use cards::{premium_quota, CardBuilder, CARDS_PER_SECTION};
pub use config::SiteConfig;
pub use error::{FeedError, FeedResult};
pub use feed::{parse_games, FeedSource, HttpFeedSource, RemoteFeedAdapter, DEFAULT_FEED_URL};
pub use forms::{
    FieldRule, FieldState, LoginField, LoginForm, PasswordVisibility, RegisterField, RegisterForm,
};
pub use menu::{ClickTarget, MenuController, MenuKind, MenuState, Popover};
pub use scroll::{
    ScrollAffordanceState, ScrollController, ScrollDirection, ScrollMetrics, ScrollRegistry,
};
pub use sections::{ContentContainer, ContentSectionBuilder, RenderedSection, SectionControls};
pub use types::*;
