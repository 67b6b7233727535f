//! Error types for quotegen.
//!
//! `collect` itself never fails; these errors surface only from
//! configuration loading and backend construction.

/// Top-level error type for quotegen.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// Configuration error (invalid values, unparsable TOML).
    #[error("config error: {0}")]
    Config(String),

    /// Search backend construction error.
    #[error("search error: {0}")]
    Search(#[from] quotegen_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, QuoteError>;
