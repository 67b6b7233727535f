//! quotegen: collect attributed quotations on a topic from web search snippets.
//!
//! # Architecture
//!
//! Data flows one way:
//! query variant → search backend → snippets → extractor → result set
//!
//! - **Extractor** ([`extract`]): ordered pattern rules isolate a quote span
//!   and an author span, which are normalised and validated
//! - **Queries** ([`queries`]): topic substituted into phrase templates
//! - **Collector** ([`collect`]): queries variants in order, deduplicates by
//!   case-folded quote, stops at the target count, then falls back
//! - **Backends** ([`quotegen_search`]): SerpAPI or DuckDuckGo, injected at
//!   construction time

pub mod collect;
pub mod config;
pub mod error;
pub mod extract;
pub mod queries;
pub mod render;
pub mod types;

pub use collect::{Collection, FetchFailure, FetchOutcome, QuoteCollector};
pub use config::QuoteConfig;
pub use error::{QuoteError, Result};
pub use extract::{Extraction, ExtractionMode, SnippetExtractor, extract};
pub use types::{QuoteEntry, QuoteOrigin};
