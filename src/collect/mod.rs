//! Collection orchestrator: query variants → backend → extractor → result set.
//!
//! Variants are queried strictly in order, one backend call at a time, so
//! that collection can stop as soon as the target count is reached. A
//! failed or timed-out call is logged and skipped; nothing ever escapes
//! [`QuoteCollector::collect`].

pub mod curated;

use std::collections::HashSet;
use std::time::Duration;

use quotegen_search::{SearchBackend, SearchRequest};

use crate::config::{CollectConfig, QuoteConfig};
use crate::extract::{ExtractionMode, SnippetExtractor, dedup_key};
use crate::types::QuoteEntry;

/// Why one backend call produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// The query that failed.
    pub query: String,
    /// Human-readable cause (transport, auth, parse, timeout).
    pub reason: String,
}

/// Typed outcome of one backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Snippet texts in result order; missing snippets are empty strings.
    Snippets(Vec<String>),
    /// The call failed; the variant is skipped.
    Failed(FetchFailure),
}

/// Detailed result of a collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// At most `target` entries; never empty.
    pub entries: Vec<QuoteEntry>,
    /// Backend calls that failed, in the order they were made.
    pub failures: Vec<FetchFailure>,
    /// Number of backend calls made (variants plus fallback).
    pub queries_issued: usize,
}

/// Pre-allocation ceiling; `target` comes from the caller and may be huge.
const MAX_PREALLOC: usize = 64;

/// Ordered, deduplicated entries capped at a target size.
struct ResultSet {
    target: usize,
    entries: Vec<QuoteEntry>,
    seen: HashSet<String>,
}

impl ResultSet {
    fn new(target: usize) -> Self {
        Self {
            target,
            entries: Vec::with_capacity(target.min(MAX_PREALLOC)),
            seen: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.target
    }

    /// Append `entry` unless full or its quote was already seen.
    fn offer(&mut self, entry: QuoteEntry) -> bool {
        if self.is_full() {
            return false;
        }
        if !self.seen.insert(dedup_key(&entry.quote)) {
            return false;
        }
        self.entries.push(entry);
        true
    }
}

/// Collects distinct quotes on a topic from a search backend.
pub struct QuoteCollector<B> {
    backend: B,
    config: CollectConfig,
    region: String,
    extractor: SnippetExtractor,
}

impl<B: SearchBackend> QuoteCollector<B> {
    /// Create a collector with strict extraction and the default region.
    pub fn new(backend: B, config: CollectConfig) -> Self {
        Self {
            backend,
            config,
            region: quotegen_search::types::DEFAULT_REGION.to_owned(),
            extractor: SnippetExtractor::default(),
        }
    }

    /// Create a collector from a full configuration.
    pub fn from_config(backend: B, config: &QuoteConfig) -> Self {
        Self::new(backend, config.collect.clone())
            .with_region(config.search.region.clone())
            .with_extraction_mode(config.extract.mode)
    }

    /// Use a different extraction rule set.
    #[must_use]
    pub fn with_extraction_mode(mut self, mode: ExtractionMode) -> Self {
        self.extractor = SnippetExtractor::new(mode);
        self
    }

    /// Use a different region hint for every query.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Collect up to `target` distinct quotes about `topic`.
    ///
    /// Never fails and never returns an empty list: when nothing is found a
    /// single [`QuoteEntry::placeholder`] is returned. A `target` of 0 is
    /// treated as 1. Callers should reject empty topics beforehand.
    pub async fn collect(&self, topic: &str, target: usize) -> Vec<QuoteEntry> {
        self.collect_report(topic, target).await.entries
    }

    /// Same as [`collect`](Self::collect), keeping failures and call counts.
    pub async fn collect_report(&self, topic: &str, target: usize) -> Collection {
        let target = target.max(1);
        let mut set = ResultSet::new(target);
        let mut failures = Vec::new();
        let mut queries_issued = 0;

        for (index, query) in self.config.queries.variants(topic).into_iter().enumerate() {
            if set.is_full() {
                break;
            }
            queries_issued += 1;
            match self.fetch(&query, self.config.results_per_query).await {
                FetchOutcome::Snippets(snippets) => {
                    let added = self.absorb(&mut set, &query, &snippets);
                    tracing::debug!(
                        variant = index,
                        results = snippets.len(),
                        added,
                        total = set.entries.len(),
                        "variant processed"
                    );
                }
                FetchOutcome::Failed(failure) => {
                    tracing::warn!(
                        variant = index,
                        reason = %failure.reason,
                        "query variant failed, skipping"
                    );
                    failures.push(failure);
                }
            }
        }

        if !set.is_full() {
            let query = self.config.queries.fallback_query(topic);
            queries_issued += 1;
            match self.fetch(&query, self.config.fallback_results).await {
                FetchOutcome::Snippets(snippets) => {
                    let added = self.absorb(&mut set, &query, &snippets);
                    tracing::debug!(results = snippets.len(), added, "fallback query processed");
                }
                FetchOutcome::Failed(failure) => {
                    tracing::warn!(reason = %failure.reason, "fallback query failed");
                    failures.push(failure);
                }
            }
        }

        if !set.is_full() && self.config.include_curated {
            let added = curated::curated_entries()
                .filter(|entry| set.offer(entry.clone()))
                .count();
            tracing::debug!(added, "topped up from curated set");
        }

        let mut entries = set.entries;
        if entries.is_empty() {
            tracing::info!("no quotes found, returning placeholder");
            entries.push(QuoteEntry::placeholder());
        }

        Collection {
            entries,
            failures,
            queries_issued,
        }
    }

    /// Run one backend call under the per-call timeout.
    pub async fn fetch(&self, query: &str, num_results: usize) -> FetchOutcome {
        tracing::trace!(query, num_results, "dispatching query");
        let request = SearchRequest::new(query, num_results).with_region(self.region.clone());
        let limit = Duration::from_secs(self.config.query_timeout_seconds);

        match tokio::time::timeout(limit, self.backend.search(&request)).await {
            Ok(Ok(results)) => {
                FetchOutcome::Snippets(results.into_iter().map(|r| r.snippet).collect())
            }
            Ok(Err(err)) => FetchOutcome::Failed(FetchFailure {
                query: query.to_owned(),
                reason: err.to_string(),
            }),
            Err(_) => FetchOutcome::Failed(FetchFailure {
                query: query.to_owned(),
                reason: format!(
                    "{} timed out after {}s",
                    self.backend.kind(),
                    limit.as_secs()
                ),
            }),
        }
    }

    /// Feed snippets through the extractor into `set`, stopping at target.
    fn absorb(&self, set: &mut ResultSet, query: &str, snippets: &[String]) -> usize {
        let mut added = 0;
        for snippet in snippets {
            if set.is_full() {
                break;
            }
            let Some(found) = self.extractor.extract(snippet) else {
                continue;
            };
            if set.offer(QuoteEntry::sourced(found.quote, found.author, query)) {
                added += 1;
            }
        }
        added
    }
}
