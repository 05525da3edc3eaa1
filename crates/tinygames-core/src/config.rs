//! Site configuration

use crate::cards::CARDS_PER_SECTION;
use crate::feed::DEFAULT_FEED_URL;

/// Runtime settings for the site, filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Game listing endpoint
    pub feed_url: String,
    /// Maximum number of cards rendered per section
    pub cards_per_section: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            cards_per_section: CARDS_PER_SECTION,
        }
    }
}

impl SiteConfig {
    /// Override the feed endpoint.
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Override the per-section card count. Zero is ignored.
    pub fn with_cards_per_section(mut self, count: usize) -> Self {
        if count > 0 {
            self.cards_per_section = count;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_feed() {
        let config = SiteConfig::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.cards_per_section, 8);
    }

    #[test]
    fn zero_cards_per_section_is_ignored() {
        let config = SiteConfig::default().with_cards_per_section(0);
        assert_eq!(config.cards_per_section, 8);
    }
}
