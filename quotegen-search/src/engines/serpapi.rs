//! SerpAPI backend — Google organic results as structured JSON.
//!
//! Requires an API key. The key is held by the backend instance and sent
//! as the `api_key` query parameter; it never appears in logs or errors.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::error::SearchError;
use crate::http;
use crate::types::{BackendKind, SearchRequest, SearchResult};

/// Default SerpAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Message SerpAPI returns (with HTTP 200) when Google had nothing to show.
const NO_RESULTS_MARKER: &str = "hasn't returned any results";

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiOrganic>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerpApiOrganic {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// SerpAPI Google search client.
pub struct SerpApiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    safe_search: bool,
}

impl SerpApiBackend {
    /// Create a backend for the given credential.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the key is blank or the config is
    /// invalid, or [`SearchError::Http`] if the client cannot be built.
    pub fn new(api_key: impl Into<String>, config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::Config("SerpAPI key must not be empty".into()));
        }
        Ok(Self {
            client: http::build_client(config, http::ClientProfile::Api)?,
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            safe_search: config.safe_search,
        })
    }

    /// Override the base URL (used by tests against a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/search.json", self.base_url)
    }
}

impl SearchBackend for SerpApiBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query = %request.query, num = request.num_results, "SerpAPI search");

        let num = request.num_results.to_string();
        let mut params = vec![
            ("engine", "google"),
            ("q", request.query.as_str()),
            ("api_key", self.api_key.as_str()),
            ("num", num.as_str()),
            ("gl", request.region.as_str()),
        ];
        if self.safe_search {
            params.push(("safe", "active"));
        }

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("SerpAPI request failed", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("SerpAPI response read failed", e))?;

        tracing::trace!(%status, bytes = body.len(), "SerpAPI response received");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let detail = error_message(&body).unwrap_or_else(|| format!("HTTP {status}"));
            return Err(SearchError::Auth(detail));
        }
        if !status.is_success() {
            let detail = match error_message(&body) {
                Some(message) => format!("SerpAPI HTTP {status}: {message}"),
                None => format!("SerpAPI HTTP {status}"),
            };
            return Err(SearchError::Http(detail));
        }

        parse_serpapi_json(&body, request.num_results)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::SerpApi
    }
}

/// Pull the `error` field out of an error body, if the body is JSON.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<SerpApiResponse>(body)
        .ok()
        .and_then(|r| r.error)
}

/// Parse a SerpAPI JSON body into organic results.
///
/// A body with no `organic_results` key yields zero results. An `error`
/// field yields [`SearchError::Api`], except for the "no results" notice,
/// which is treated as an empty page.
pub(crate) fn parse_serpapi_json(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let parsed: SerpApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid SerpAPI JSON: {e}")))?;

    if let Some(error) = parsed.error {
        if parsed.organic_results.is_empty() && error.contains(NO_RESULTS_MARKER) {
            return Ok(Vec::new());
        }
        if parsed.organic_results.is_empty() {
            return Err(SearchError::Api(error));
        }
    }

    let results: Vec<SearchResult> = parsed
        .organic_results
        .into_iter()
        .take(max_results)
        .enumerate()
        .map(|(position, r)| SearchResult {
            title: r.title,
            url: r.link,
            snippet: r.snippet,
            backend: BackendKind::SerpApi.name().to_owned(),
            position,
        })
        .collect();

    tracing::debug!(count = results.len(), "SerpAPI results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_organic_results() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"position": 1, "title": "Love Quotes", "link": "https://a.example", "snippet": "\"Love is patient.\" - Paul"},
                {"position": 2, "title": "More", "link": "https://b.example", "snippet": "second"}
            ]
        }"#;
        let results = parse_serpapi_json(body, 15).expect("should parse");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Love Quotes");
        assert_eq!(results[0].url, "https://a.example");
        assert!(results[0].snippet.contains("patient"));
        assert_eq!(results[0].backend, "SerpAPI");
        assert_eq!(results[1].position, 1);
    }

    #[test]
    fn missing_snippet_field_is_empty() {
        let body = r#"{"organic_results": [{"title": "No snippet"}]}"#;
        let results = parse_serpapi_json(body, 15).expect("should parse");
        assert_eq!(results.len(), 1);
        assert!(results[0].snippet.is_empty());
    }

    #[test]
    fn missing_organic_results_is_zero_results() {
        let body = r#"{"search_metadata": {"status": "Success"}, "answer_box": {}}"#;
        let results = parse_serpapi_json(body, 15).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn no_results_notice_is_zero_results() {
        let body = r#"{"error": "Google hasn't returned any results for this query."}"#;
        let results = parse_serpapi_json(body, 15).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn error_payload_is_api_error() {
        let body = r#"{"error": "Your account has run out of searches."}"#;
        let err = parse_serpapi_json(body, 15).unwrap_err();
        assert!(matches!(err, SearchError::Api(_)));
        assert!(err.to_string().contains("run out of searches"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_serpapi_json("<html>oops</html>", 15).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn respects_max_results() {
        let body = r#"{"organic_results": [{"snippet": "a"}, {"snippet": "b"}, {"snippet": "c"}]}"#;
        let results = parse_serpapi_json(body, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn blank_key_rejected() {
        let result = SerpApiBackend::new("  ", &SearchConfig::default());
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let backend = SerpApiBackend::new("key", &SearchConfig::default())
            .expect("backend")
            .with_base_url("http://localhost:1234/");
        assert_eq!(backend.endpoint(), "http://localhost:1234/search.json");
    }

    #[test]
    fn kind_is_serpapi() {
        let backend = SerpApiBackend::new("key", &SearchConfig::default()).expect("backend");
        assert_eq!(backend.kind(), BackendKind::SerpApi);
    }
}
