//! Snippet extractor: raw search snippet in, validated (quote, author) out.
//!
//! The extractor walks an explicit, ordered list of [`PatternRule`]s. The
//! first rule whose capture survives normalisation and validation wins; a
//! candidate that fails validation never aborts the walk, the next rule is
//! tried instead.
//!
//! Two modes are available:
//!
//! - [`ExtractionMode::Strict`] (default) requires explicit quote delimiters.
//! - [`ExtractionMode::Loose`] additionally accepts unquoted text before a
//!   dash separator. It finds more quotes and more false positives
//!   (e.g. `Top 10 quotes - BrainyQuote`).

pub mod normalize;
pub mod rules;

use serde::{Deserialize, Serialize};

pub use normalize::{dedup_key, normalize_author, normalize_quote};
pub use rules::{PatternRule, loose_rules, strict_rules};

/// Which rule set the extractor uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Quote delimiters required.
    #[default]
    Strict,
    /// Strict rules plus the unquoted dash rule.
    Loose,
}

/// A validated quote with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Normalised quote text.
    pub quote: String,
    /// Normalised author name.
    pub author: String,
    /// Name of the rule that produced this pair.
    pub rule: &'static str,
}

/// Applies an ordered rule list to snippets.
#[derive(Debug, Clone, Copy)]
pub struct SnippetExtractor {
    rules: &'static [PatternRule],
}

impl Default for SnippetExtractor {
    fn default() -> Self {
        Self::new(ExtractionMode::default())
    }
}

impl SnippetExtractor {
    /// Create an extractor for the given mode.
    pub fn new(mode: ExtractionMode) -> Self {
        let rules = match mode {
            ExtractionMode::Strict => strict_rules(),
            ExtractionMode::Loose => loose_rules(),
        };
        Self { rules }
    }

    /// The rules this extractor tries, in priority order.
    pub fn rules(&self) -> &'static [PatternRule] {
        self.rules
    }

    /// Extract the best (quote, author) pair from a snippet.
    ///
    /// Returns `None` for an empty snippet or when no rule yields a pair
    /// that passes normalisation, the author blacklist, and the length
    /// invariants.
    pub fn extract(&self, snippet: &str) -> Option<Extraction> {
        if snippet.trim().is_empty() {
            return None;
        }

        for rule in self.rules {
            let Some((raw_quote, raw_author)) = rule.capture(snippet) else {
                continue;
            };

            let Some(quote) = normalize_quote(raw_quote) else {
                continue;
            };
            let Some(author) = normalize_author(raw_author) else {
                tracing::trace!(rule = rule.name, author = raw_author, "author rejected");
                continue;
            };
            if !normalize::meets_length_invariants(&quote, &author) {
                tracing::trace!(rule = rule.name, "candidate too short");
                continue;
            }

            tracing::trace!(rule = rule.name, %author, "snippet matched");
            return Some(Extraction {
                quote,
                author,
                rule: rule.name,
            });
        }

        None
    }
}

/// Extract a pair from a snippet using the strict rule set.
pub fn extract(snippet: &str) -> Option<Extraction> {
    SnippetExtractor::default().extract(snippet)
}
