//! DuckDuckGo backend — key-less, scraped from the HTML-only endpoint.
//!
//! Uses `https://html.duckduckgo.com/html/`, which requires no JavaScript
//! and is tolerant of automated requests. Useful when no SerpAPI key is
//! configured.

use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::error::SearchError;
use crate::http;
use crate::types::{BackendKind, SearchRequest, SearchResult};
use scraper::{Html, Selector};
use url::Url;

/// Default HTML endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML scraper.
pub struct DuckDuckGoBackend {
    client: reqwest::Client,
    endpoint: String,
    safe_search: bool,
}

impl DuckDuckGoBackend {
    /// Create a backend with a client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid config, or
    /// [`SearchError::Http`] if the client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            client: http::build_client(config, http::ClientProfile::Browser)?,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            safe_search: config.safe_search,
        })
    }

    /// Point the backend at a different endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SearchBackend for DuckDuckGoBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query = %request.query, "DuckDuckGo search");

        let region = format!("{}-en", request.region);
        let mut params = vec![("q", request.query.as_str()), ("kl", region.as_str())];
        if self.safe_search {
            params.push(("kp", "1"));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo request failed", e))?
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo HTTP error", e))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo response read failed", e))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, request.num_results)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::DuckDuckGo
    }
}

/// Parse a DuckDuckGo HTML page into organic results.
///
/// Ads are skipped. A result without a snippet element keeps an empty
/// snippet.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };
        let title = title_el.text().collect::<String>().trim().to_string();

        let url = title_el
            .value()
            .attr("href")
            .and_then(DuckDuckGoBackend::extract_url)
            .unwrap_or_default();

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            backend: BackendKind::DuckDuckGo.name().to_string(),
            position: results.len(),
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_DDG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.goodreads.com%2Fquotes%2Ftag%2Fcourage&amp;rut=abc123">
        Courage Quotes (4512 quotes) - Goodreads
    </a>
    <div class="result__snippet">
        “Courage is found in unlikely places.” ― J.R.R. Tolkien
    </div>
</div>
<div class="result results_links results_links_deep web-result result--ad">
    <a class="result__a" href="https://ads.example.com/">Buy quote posters (Ad)</a>
    <div class="result__snippet">Posters for every wall.</div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://www.brainyquote.com/topics/courage-quotes">
        Courage Quotes - BrainyQuote
    </a>
    <div class="result__snippet">
        "Courage is grace under pressure." - Ernest Hemingway
    </div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://example.org/no-snippet">No snippet here</a>
</div>
</body>
</html>"#;

    #[test]
    fn extract_url_from_ddg_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        assert_eq!(
            DuckDuckGoBackend::extract_url(href),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn extract_url_direct_link() {
        let href = "https://example.com/direct";
        assert_eq!(
            DuckDuckGoBackend::extract_url(href),
            Some("https://example.com/direct".to_string())
        );
    }

    #[test]
    fn extract_url_invalid() {
        assert!(DuckDuckGoBackend::extract_url("not-a-url").is_none());
    }

    #[test]
    fn parse_mock_html_skips_ads() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML, 10).expect("should parse");
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.title.contains("(Ad)")));
    }

    #[test]
    fn parse_mock_html_fields() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML, 10).expect("should parse");
        assert_eq!(
            results[0].url,
            "https://www.goodreads.com/quotes/tag/courage"
        );
        assert!(results[0].snippet.contains("Tolkien"));
        assert_eq!(results[0].backend, "DuckDuckGo");
        assert_eq!(results[1].position, 1);
        assert!(results[1].snippet.contains("Hemingway"));
    }

    #[test]
    fn missing_snippet_is_empty_not_error() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML, 10).expect("should parse");
        assert_eq!(results[2].title, "No snippet here");
        assert!(results[2].snippet.is_empty());
    }

    #[test]
    fn parse_respects_max_results() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results =
            parse_duckduckgo_html("<html><body></body></html>", 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn kind_is_duckduckgo() {
        let backend = DuckDuckGoBackend::new(&SearchConfig::default()).expect("backend");
        assert_eq!(backend.kind(), BackendKind::DuckDuckGo);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DuckDuckGoBackend>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_duckduckgo_search() {
        let backend = DuckDuckGoBackend::new(&SearchConfig::default()).expect("backend");
        let results = backend
            .search(&SearchRequest::new("courage quotes", 10))
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
    }
}
