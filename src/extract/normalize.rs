//! Text normalisation and validation for quote and author spans.

/// Quote glyphs stripped from both ends of a quote span.
const QUOTE_GLYPHS: &[char] = &['"', '\'', '“', '”', '‘', '’', '«', '»', '„'];

/// Punctuation trimmed from the ends of an author span.
const AUTHOR_TRIM: &[char] = &['.', ',', ';', ':', '-'];

/// Substrings that mark an author span as navigation text or a URL.
pub const AUTHOR_BLACKLIST: &[&str] = &["http", "www", ".com", "click", "search", "more"];

/// A quote must be longer than this many characters.
pub const MIN_QUOTE_CHARS: usize = 10;

/// An author must be longer than this many characters.
pub const MIN_AUTHOR_CHARS: usize = 2;

/// Collapse every whitespace run (including newlines) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalise a raw quote span.
///
/// Collapses whitespace, strips surrounding quote glyphs, turns a trailing
/// comma into a period (or appends one when no `.`/`!`/`?` ends the text),
/// and uppercases the first character. Returns `None` when nothing is left.
pub fn normalize_quote(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw);
    let stripped = collapsed.trim_matches(|c: char| QUOTE_GLYPHS.contains(&c) || c.is_whitespace());
    if stripped.is_empty() {
        return None;
    }

    let mut text = if let Some(body) = stripped.strip_suffix(',') {
        format!("{body}.")
    } else if stripped.ends_with(&['.', '!', '?'][..]) {
        stripped.to_owned()
    } else {
        format!("{stripped}.")
    };

    text = uppercase_first(&text);
    Some(text)
}

/// Normalise a raw author span.
///
/// Collapses whitespace and trims `.,;:-` from both ends. Returns `None`
/// when nothing is left or when the author contains a blacklisted
/// substring (case-insensitive).
pub fn normalize_author(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw);
    let trimmed = collapsed.trim_matches(|c: char| AUTHOR_TRIM.contains(&c) || c.is_whitespace());
    if trimmed.is_empty() || is_blacklisted(trimmed) {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Whether `author` contains any blacklisted substring, ignoring case.
pub fn is_blacklisted(author: &str) -> bool {
    let lower = author.to_lowercase();
    AUTHOR_BLACKLIST.iter().any(|needle| lower.contains(needle))
}

/// Whether a normalised pair satisfies the length invariants.
pub fn meets_length_invariants(quote: &str, author: &str) -> bool {
    quote.chars().count() > MIN_QUOTE_CHARS && author.chars().count() > MIN_AUTHOR_CHARS
}

/// Case-folded dedup key for a normalised quote.
pub fn dedup_key(quote: &str) -> String {
    collapse_whitespace(quote).to_lowercase()
}

fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
