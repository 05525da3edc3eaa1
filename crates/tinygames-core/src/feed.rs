//! Remote game listing
//!
//! Fetching and decoding are separate stages: a [`FeedSource`] returns the
//! raw body and [`parse_games`] turns it into [`GameItem`]s. The adapter on
//! top never fails; any error is logged and the page simply gets no games.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{FeedError, FeedResult};
use crate::types::GameItem;

/// Public game listing endpoint
pub const DEFAULT_FEED_URL: &str = "https://vj.interfaces.jima.com.ar/api/v2";

/// Where the raw listing body comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the listing body. Non-success statuses are errors.
    async fn fetch_body(&self) -> FeedResult<Vec<u8>>;
}

/// Single HTTP GET against a fixed URL. No retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_body(&self) -> FeedResult<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Decode a listing body.
///
/// Accepts a bare array or `{ "results": [...] }`. From each entry only
/// `background_image` and `name` are kept; missing or non-string values
/// become empty strings.
pub fn parse_games(body: &[u8]) -> FeedResult<Vec<GameItem>> {
    let payload: Value = serde_json::from_slice(body)?;

    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(FeedError::Shape(format!(
                    "`results` is {}, expected an array",
                    json_kind(&other)
                )))
            }
            None => return Err(FeedError::Shape("object without `results`".to_string())),
        },
        other => {
            return Err(FeedError::Shape(format!(
                "top level is {}, expected an array or object",
                json_kind(&other)
            )))
        }
    };

    Ok(entries.iter().map(game_from_entry).collect())
}

fn game_from_entry(entry: &Value) -> GameItem {
    let field = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    GameItem {
        image_url: field("background_image"),
        title: field("name"),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetches the game listing for the home page.
pub struct RemoteFeedAdapter<S = HttpFeedSource> {
    source: S,
}

impl RemoteFeedAdapter<HttpFeedSource> {
    /// Adapter for the public endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_FEED_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_source(HttpFeedSource::new(url))
    }
}

impl Default for RemoteFeedAdapter<HttpFeedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FeedSource> RemoteFeedAdapter<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fetch and decode, surfacing the failure.
    pub async fn try_fetch_games(&self) -> FeedResult<Vec<GameItem>> {
        let body = self.source.fetch_body().await?;
        parse_games(&body)
    }

    /// Fetch and decode. Any failure is logged and yields an empty list,
    /// which callers treat as "no games available".
    pub async fn fetch_games(&self) -> Vec<GameItem> {
        match self.try_fetch_games().await {
            Ok(games) => {
                tracing::info!(count = games.len(), "Fetched game listing");
                games
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch game listing");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(FeedResultFactory);

    type FeedResultFactory = fn() -> FeedResult<Vec<u8>>;

    #[async_trait]
    impl FeedSource for StaticSource {
        async fn fetch_body(&self) -> FeedResult<Vec<u8>> {
            (self.0)()
        }
    }

    #[test]
    fn parses_wrapped_results() {
        let body = br#"{"count": 1, "results": [{"background_image": "a.png", "name": "Foo", "rating": 4.5}]}"#;
        let games = parse_games(body).unwrap();
        assert_eq!(games, vec![GameItem::new("a.png", "Foo")]);
    }

    #[test]
    fn parses_bare_array() {
        let body = br#"[{"background_image": "a.png", "name": "Foo"}, {"background_image": "b.png", "name": "Bar"}]"#;
        let games = parse_games(body).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1], GameItem::new("b.png", "Bar"));
    }

    #[test]
    fn malformed_entries_become_blank() {
        let body = br#"[{"name": "No Image"}, {"background_image": null, "name": 7}, 42]"#;
        let games = parse_games(body).unwrap();
        assert_eq!(
            games,
            vec![
                GameItem::new("", "No Image"),
                GameItem::default(),
                GameItem::default()
            ]
        );
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(matches!(parse_games(b"{\"items\": []}"), Err(FeedError::Shape(_))));
        assert!(matches!(parse_games(b"{\"results\": null}"), Err(FeedError::Shape(_))));
        assert!(matches!(parse_games(b"\"text\""), Err(FeedError::Shape(_))));
        assert!(matches!(parse_games(b"<html>"), Err(FeedError::Parse(_))));
    }

    #[tokio::test]
    async fn source_error_yields_empty_list() {
        let adapter = RemoteFeedAdapter::with_source(StaticSource(|| Err(FeedError::Status(500))));
        assert!(adapter.fetch_games().await.is_empty());
        assert!(matches!(
            adapter.try_fetch_games().await,
            Err(FeedError::Status(500))
        ));
    }

    #[tokio::test]
    async fn parse_error_yields_empty_list() {
        let adapter = RemoteFeedAdapter::with_source(StaticSource(|| Ok(b"not json".to_vec())));
        assert!(adapter.fetch_games().await.is_empty());
    }

    #[tokio::test]
    async fn successful_fetch_maps_games() {
        let adapter = RemoteFeedAdapter::with_source(StaticSource(|| {
            Ok(br#"{"results":[{"background_image":"a.png","name":"Foo"}]}"#.to_vec())
        }));
        assert_eq!(adapter.fetch_games().await, vec![GameItem::new("a.png", "Foo")]);
    }
}
