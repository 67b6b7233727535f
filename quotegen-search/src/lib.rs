//! # quotegen-search
//!
//! Search backends that feed snippets to the quotegen extractor.
//!
//! ## Design
//!
//! - [`SearchBackend`] is the seam: one request in, organic results out
//! - [`SerpApiBackend`] queries SerpAPI's Google JSON endpoint with an API key
//! - [`DuckDuckGoBackend`] scrapes the HTML-only DuckDuckGo page, no key needed
//! - [`AnyBackend`] selects one at runtime from configuration
//! - Missing snippet fields come back as empty strings, never as errors
//!
//! ## Security
//!
//! - API keys are injected at construction time, never read from globals
//! - Queries are logged only at trace level
//! - Request URLs (which carry the key) are stripped from error messages

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod types;

pub use config::SearchConfig;
pub use engine::SearchBackend;
pub use engines::{AnyBackend, DuckDuckGoBackend, SerpApiBackend};
pub use error::{Result, SearchError};
pub use types::{BackendKind, SearchRequest, SearchResult};
