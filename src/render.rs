//! Plain-text rendering of a result set for the terminal.

use std::fmt::Write as _;

use crate::types::{QuoteEntry, QuoteOrigin};

/// Render `entries` as a numbered list under a "Quotes about …" heading.
///
/// Entries with an empty author (the placeholder) omit the attribution;
/// curated entries are marked so they are never mistaken for search hits.
pub fn format_entries(topic: &str, entries: &[QuoteEntry]) -> String {
    let mut out = format!("Quotes about {}\n\n", capitalize(topic.trim()));
    for (i, entry) in entries.iter().enumerate() {
        let _ = write!(out, "{}. \"{}\"", i + 1, entry.quote);
        if !entry.author.is_empty() {
            let _ = write!(out, " - {}", entry.author);
        }
        if entry.origin == QuoteOrigin::Curated {
            out.push_str(" [curated]");
        }
        out.push('\n');
    }
    out
}

/// Capitalize the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => {
            let mut result = c.to_uppercase().to_string();
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_list_with_heading() {
        let entries = vec![
            QuoteEntry::sourced("Love is patient.", "Paul", "love quotes"),
            QuoteEntry::sourced("Love conquers all.", "Virgil", "love quotes"),
        ];
        let text = format_entries("love", &entries);
        assert!(text.starts_with("Quotes about Love\n"));
        assert!(text.contains("1. \"Love is patient.\" - Paul\n"));
        assert!(text.contains("2. \"Love conquers all.\" - Virgil\n"));
    }

    #[test]
    fn placeholder_has_no_attribution() {
        let text = format_entries("zzz", &[QuoteEntry::placeholder()]);
        assert!(text.contains("1. \"No relevant quotes found. Please try a different topic.\"\n"));
        assert!(!text.contains(" - "));
    }

    #[test]
    fn curated_entries_are_marked() {
        let text = format_entries(
            "success",
            &[QuoteEntry::curated("Happiness depends upon ourselves.", "Aristotle")],
        );
        assert!(text.contains("- Aristotle [curated]"));
    }
}
