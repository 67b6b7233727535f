//! Result types returned to the presentation layer.

use serde::{Deserialize, Serialize};

/// Quote text of the placeholder entry returned when nothing was found.
pub const PLACEHOLDER_QUOTE: &str = "No relevant quotes found. Please try a different topic.";

/// Where a returned entry came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteOrigin {
    /// Extracted from a search snippet returned for `query`.
    Sourced {
        /// The query variant whose results contained the snippet.
        query: String,
    },
    /// Taken from the built-in curated set, not from search results.
    Curated,
    /// The "nothing found" marker.
    Placeholder,
}

/// One (quote, author) pair in a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// Normalised quote text.
    pub quote: String,
    /// Normalised author; empty only for the placeholder.
    pub author: String,
    /// Provenance tag.
    pub origin: QuoteOrigin,
}

impl QuoteEntry {
    /// An entry extracted from a snippet.
    pub fn sourced(
        quote: impl Into<String>,
        author: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            origin: QuoteOrigin::Sourced {
                query: query.into(),
            },
        }
    }

    /// An entry from the curated set.
    pub fn curated(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            origin: QuoteOrigin::Curated,
        }
    }

    /// The "no relevant quotes found" entry, with an empty author.
    pub fn placeholder() -> Self {
        Self {
            quote: PLACEHOLDER_QUOTE.to_owned(),
            author: String::new(),
            origin: QuoteOrigin::Placeholder,
        }
    }

    /// Whether this entry came from search results.
    pub fn is_sourced(&self) -> bool {
        matches!(self.origin, QuoteOrigin::Sourced { .. })
    }

    /// Whether this entry was not found by search (curated or placeholder).
    pub fn is_synthetic(&self) -> bool {
        !self.is_sourced()
    }
}
