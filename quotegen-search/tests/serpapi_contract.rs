//! SerpAPI backend contract tests.
//!
//! Verify request parameters, response parsing, and error mapping against
//! a local mock server. No real network calls are made.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use quotegen_search::{SearchBackend, SearchConfig, SearchError, SearchRequest, SerpApiBackend};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer, key: &str) -> SerpApiBackend {
    let config = SearchConfig {
        timeout_seconds: 5,
        safe_search: false,
        user_agent: Some("QuoteBot/1.0".into()),
    };
    SerpApiBackend::new(key, &config)
        .expect("backend")
        .with_base_url(server.uri())
}

#[tokio::test]
async fn request_carries_query_key_bound_and_region() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "love quotes"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("num", "15"))
        .and(query_param("gl", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = backend(&server, "test-key")
        .search(&SearchRequest::new("love quotes", 15))
        .await
        .expect("should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn snippets_returned_in_rank_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [
                {"position": 1, "title": "A", "link": "https://a.example",
                 "snippet": "\"Success is not final; failure is not fatal.\" - Winston Churchill"},
                {"position": 2, "title": "B", "link": "https://b.example"},
                {"position": 3, "title": "C", "link": "https://c.example", "snippet": "third"}
            ]
        })))
        .mount(&server)
        .await;

    let results = backend(&server, "k")
        .search(&SearchRequest::new("success quotes", 15))
        .await
        .expect("should succeed");

    assert_eq!(results.len(), 3);
    assert!(results[0].snippet.contains("Churchill"));
    assert!(results[1].snippet.is_empty());
    assert_eq!(results[2].snippet, "third");
    assert_eq!(results[2].position, 2);
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key."})),
        )
        .mount(&server)
        .await;

    let err = backend(&server, "bad-key")
        .search(&SearchRequest::new("q", 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Auth(_)));
    assert!(err.to_string().contains("Invalid API key"));
    assert!(!err.to_string().contains("bad-key"));
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = backend(&server, "k")
        .search(&SearchRequest::new("q", 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Http(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = backend(&server, "k")
        .search(&SearchRequest::new("q", 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn slow_server_maps_to_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organic_results": []}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = SearchConfig {
        timeout_seconds: 1,
        safe_search: false,
        user_agent: None,
    };
    let backend = SerpApiBackend::new("k", &config)
        .expect("backend")
        .with_base_url(server.uri());

    let err = backend
        .search(&SearchRequest::new("q", 15))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Timeout(_)));
}

#[tokio::test]
async fn default_request_is_unfiltered_and_identifies_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param_is_missing("safe"))
        .and(header("user-agent", quotegen_search::http::API_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = SerpApiBackend::new("k", &SearchConfig::default())
        .expect("backend")
        .with_base_url(server.uri());

    let results = backend
        .search(&SearchRequest::new("q", 15))
        .await
        .expect("should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn safe_search_sent_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("safe", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = SearchConfig {
        safe_search: true,
        ..SearchConfig::default()
    };
    let backend = SerpApiBackend::new("k", &config)
        .expect("backend")
        .with_base_url(server.uri());

    backend
        .search(&SearchRequest::new("q", 15))
        .await
        .expect("should succeed");
}
