//! Trait definition for pluggable search backends.
//!
//! Each backend (SerpAPI, DuckDuckGo) implements [`SearchBackend`] so the
//! quote collector can be driven by any of them, or by a scripted mock in
//! tests.

use crate::error::SearchError;
use crate::types::{BackendKind, SearchRequest, SearchResult};

/// A pluggable search backend.
///
/// Implementors turn one [`SearchRequest`] into a list of organic
/// [`SearchResult`] values. Each backend handles its own:
///
/// - URL construction with query encoding
/// - credential placement
/// - response parsing
/// - mapping of transport, auth, and parse failures into [`SearchError`]
///
/// All implementations must be `Send + Sync`.
pub trait SearchBackend: Send + Sync {
    /// Perform one search and return the organic results in rank order.
    ///
    /// Missing snippet fields must come back as empty strings, never as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the credential is
    /// rejected, or the response cannot be parsed.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`BackendKind`] this implementation represents.
    fn kind(&self) -> BackendKind;
}
