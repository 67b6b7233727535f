//! Ordered pattern rules for isolating quote and author spans.
//!
//! Each rule has two capture groups: group 1 is the raw quote span and
//! group 2 the raw author span. Rules are listed most specific first.

use std::sync::LazyLock;

use regex::Regex;

/// One snippet pattern with its capture groups and the reason it exists.
#[derive(Debug)]
pub struct PatternRule {
    /// Stable identifier, used in logs and tests.
    pub name: &'static str,
    /// What phrasing this rule targets.
    pub rationale: &'static str,
    /// Compiled pattern; group 1 = quote, group 2 = author.
    pub regex: Regex,
}

impl PatternRule {
    /// Apply this rule to a snippet, returning the raw (quote, author) spans
    /// of the leftmost match.
    pub fn capture<'s>(&self, snippet: &'s str) -> Option<(&'s str, &'s str)> {
        let caps = self.regex.captures(snippet)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

/// (name, rationale, pattern) as written in source.
type RuleSource = (&'static str, &'static str, &'static str);

/// Sources for the delimiter-requiring rules.
///
/// `[-–—―~]` is the dash family; the author runs from a capital letter to
/// the next comma or newline.
const STRICT_SOURCES: &[RuleSource] = &[
    (
        "curly_or_straight_double_dash",
        "double quotes of either style plus a dash separator: highest confidence",
        r#"(?s)["“”]([^"“”]+)["“”]\s*[-–—―~]\s*([A-Z][^,\n]{2,})"#,
    ),
    (
        "straight_double_dash",
        "straight double quotes plus a dash separator",
        r#"(?s)"([^"]+)"\s*[-–—―~]\s*([A-Z][^,\n]{2,})"#,
    ),
    (
        "single_quoted_dash",
        "single quotes plus a dash separator",
        r"(?s)['‘’]([^'‘’]+)['‘’]\s*[-–—―~]\s*([A-Z][^,\n]{2,})",
    ),
    (
        "quoted_by",
        "\"quote\" by Author phrasing",
        r#"(?s)["“”]([^"“”]+)["“”]\s*by\s*([A-Z][^,\n]{2,})"#,
    ),
    (
        "quoted_implicit_name",
        "quote followed directly by a one to three word capitalised name",
        r#"(?s)["“”]([^"“”]+)["“”]\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2})"#,
    ),
    (
        "guillemet_dash",
        "«guillemet» quotes plus a dash separator",
        r"(?s)[«»]([^«»]+)[«»]\s*[-–—―~]\s*([A-Z][^,\n]{2,})",
    ),
    (
        "long_quoted_dash",
        "double-quoted 15+ chars plus a dash; catches a later quote after a short one",
        r#"(?s)"([^"]{15,})"\s*[-–—―~]\s*([A-Z][^,\n]{2,})"#,
    ),
];

/// Extra rule enabled by loose mode: no quote delimiters required.
const UNQUOTED_SOURCE: RuleSource = (
    "unquoted_dash",
    "any text before a dash separator; more recall, more false positives",
    r"(?s)(.+?)\s*[-–—―~]\s*([A-Z][^,\n]+)",
);

static STRICT_RULES: LazyLock<Vec<PatternRule>> =
    LazyLock::new(|| STRICT_SOURCES.iter().filter_map(compile).collect());

static LOOSE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    STRICT_SOURCES
        .iter()
        .chain(std::iter::once(&UNQUOTED_SOURCE))
        .filter_map(compile)
        .collect()
});

/// Delimiter-requiring rules in priority order.
pub fn strict_rules() -> &'static [PatternRule] {
    &STRICT_RULES
}

/// Strict rules followed by the unquoted dash rule.
pub fn loose_rules() -> &'static [PatternRule] {
    &LOOSE_RULES
}

fn compile(&(name, rationale, pattern): &RuleSource) -> Option<PatternRule> {
    match Regex::new(pattern) {
        Ok(regex) => Some(PatternRule {
            name,
            rationale,
            regex,
        }),
        Err(err) => {
            tracing::error!(
                rule = name,
                error = %err,
                "pattern rule failed to compile, skipping"
            );
            None
        }
    }
}
