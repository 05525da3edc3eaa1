//! Error types for the TinyGames feed

use thiserror::Error;

/// Failure while fetching or decoding the game listing.
///
/// These never reach the page: [`crate::RemoteFeedAdapter::fetch_games`]
/// logs them and falls back to an empty list.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Endpoint answered with a non-success HTTP status
    #[error("Feed returned HTTP status {0}")]
    Status(u16),

    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body was valid JSON but neither an array nor an object with `results`
    #[error("Unexpected feed shape: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network(err.to_string())
    }
}

/// Result type alias using FeedError
pub type FeedResult<T> = Result<T, FeedError>;
