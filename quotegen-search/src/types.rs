//! Core types for search requests, results, and backend identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default locale/region hint sent to backends that support one.
pub const DEFAULT_REGION: &str = "us";

/// One query dispatched to a search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The query string, unencoded.
    pub query: String,
    /// Upper bound on organic results requested.
    pub num_results: usize,
    /// Locale/region hint (e.g. `"us"`).
    pub region: String,
}

impl SearchRequest {
    /// Create a request with the default region.
    pub fn new(query: impl Into<String>, num_results: usize) -> Self {
        Self {
            query: query.into(),
            num_results,
            region: DEFAULT_REGION.to_owned(),
        }
    }

    /// Override the region hint.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

/// A single organic result returned by a search backend.
///
/// Every text field may be empty: a backend that omits a field yields an
/// empty string rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result page.
    pub url: String,
    /// Free-text snippet summarising the page.
    pub snippet: String,
    /// Which backend returned this result.
    pub backend: String,
    /// Zero-based rank within the backend's response.
    pub position: usize,
}

/// Supported search backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// SerpAPI Google results — needs an API key, structured JSON.
    #[default]
    SerpApi,
    /// DuckDuckGo HTML endpoint — key-less, scraped with CSS selectors.
    DuckDuckGo,
}

impl BackendKind {
    /// Returns the human-readable name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SerpApi => "SerpAPI",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Whether this backend needs an API credential.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::SerpApi)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serpapi" => Ok(Self::SerpApi),
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            other => Err(format!("unknown search backend: {other}")),
        }
    }
}
