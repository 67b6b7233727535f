//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::engine::SearchBackend`].
//! [`AnyBackend`] picks one at runtime from configuration.

pub mod duckduckgo;
pub mod serpapi;

pub use duckduckgo::DuckDuckGoBackend;
pub use serpapi::SerpApiBackend;

use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::error::SearchError;
use crate::types::{BackendKind, SearchRequest, SearchResult};

/// A backend chosen at runtime.
pub enum AnyBackend {
    /// SerpAPI Google JSON.
    SerpApi(SerpApiBackend),
    /// DuckDuckGo HTML scraper.
    DuckDuckGo(DuckDuckGoBackend),
}

impl AnyBackend {
    /// Build the backend for `kind`.
    ///
    /// `api_key` is required for [`BackendKind::SerpApi`] and ignored
    /// otherwise. `base_url` overrides the backend's endpoint when set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when a required key is missing, or
    /// any error from the backend constructor.
    pub fn from_kind(
        kind: BackendKind,
        api_key: Option<&str>,
        base_url: Option<&str>,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if kind.requires_api_key() && api_key.is_none() {
            return Err(SearchError::Config(format!("{kind} backend requires an API key")));
        }

        match kind {
            BackendKind::SerpApi => {
                let mut backend = SerpApiBackend::new(api_key.unwrap_or_default(), config)?;
                if let Some(url) = base_url {
                    backend = backend.with_base_url(url);
                }
                Ok(Self::SerpApi(backend))
            }
            BackendKind::DuckDuckGo => {
                let mut backend = DuckDuckGoBackend::new(config)?;
                if let Some(url) = base_url {
                    backend = backend.with_endpoint(url);
                }
                Ok(Self::DuckDuckGo(backend))
            }
        }
    }
}

impl SearchBackend for AnyBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        match self {
            Self::SerpApi(backend) => backend.search(request).await,
            Self::DuckDuckGo(backend) => backend.search(request).await,
        }
    }

    fn kind(&self) -> BackendKind {
        match self {
            Self::SerpApi(backend) => backend.kind(),
            Self::DuckDuckGo(backend) => backend.kind(),
        }
    }
}
