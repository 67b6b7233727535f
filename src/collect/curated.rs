//! Built-in curated quotes used to top up a short result set.
//!
//! Entries from here are always tagged [`QuoteOrigin::Curated`] and are
//! only added when `include_curated` is enabled.
//!
//! [`QuoteOrigin::Curated`]: crate::types::QuoteOrigin::Curated

use crate::types::QuoteEntry;

/// (quote, author) pairs, already normalised.
pub const CURATED_QUOTES: &[(&str, &str)] = &[
    (
        "Failure is the stepping stone to success.",
        "Arianna Huffington",
    ),
    ("Happiness depends upon ourselves.", "Aristotle"),
    (
        "Success is not final; failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
    ),
];

/// Curated entries in their fixed order.
pub fn curated_entries() -> impl Iterator<Item = QuoteEntry> {
    CURATED_QUOTES
        .iter()
        .map(|(quote, author)| QuoteEntry::curated(*quote, *author))
}
