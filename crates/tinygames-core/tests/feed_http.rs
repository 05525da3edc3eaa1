//! HTTP tests for the game listing adapter against a mock server.

use tinygames_core::{FeedError, GameItem, RemoteFeedAdapter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> RemoteFeedAdapter {
    RemoteFeedAdapter::with_url(format!("{}/api/v2", server.uri()))
}

#[tokio::test]
async fn test_wrapped_results_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "background_image": "a.png", "name": "Foo", "slug": "foo" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let games = adapter_for(&server).fetch_games().await;
    assert_eq!(games, vec![GameItem::new("a.png", "Foo")]);

    // What the card builder receives
    assert_eq!(
        serde_json::to_value(&games).unwrap(),
        serde_json::json!([{ "imagen": "a.png", "titulo": "Foo" }])
    );
}

#[tokio::test]
async fn test_bare_array_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "background_image": "a.png", "name": "Foo" },
            { "background_image": "b.png", "name": "Bar" }
        ])))
        .mount(&server)
        .await;

    let games = adapter_for(&server).fetch_games().await;
    assert_eq!(games.len(), 2);
}

#[tokio::test]
async fn test_server_error_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    assert!(adapter.fetch_games().await.is_empty());
}

#[tokio::test]
async fn test_not_found_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = adapter_for(&server).try_fetch_games().await;
    assert!(matches!(result, Err(FeedError::Status(404))));
}

#[tokio::test]
async fn test_invalid_json_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert!(adapter_for(&server).fetch_games().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_list() {
    // Port 9 (discard) on localhost is not expected to serve HTTP
    let adapter = RemoteFeedAdapter::with_url("http://127.0.0.1:9/api/v2");
    let result = adapter.try_fetch_games().await;
    assert!(matches!(result, Err(FeedError::Network(_))));
    assert!(adapter.fetch_games().await.is_empty());
}
