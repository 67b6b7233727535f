//! Error types for the quotegen-search crate.
//!
//! Messages are stable strings suitable for logs. API keys never appear
//! in error text; request URLs are stripped before formatting.

/// Errors that can occur while querying a search backend.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport-level failure or unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend rejected the credential (401/403).
    #[error("authentication error: {0}")]
    Auth(String),

    /// The backend answered with an error payload instead of results.
    #[error("backend error: {0}")]
    Api(String),

    /// Failed to parse the backend response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend did not answer in time.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid backend configuration (missing key, bad base URL, ...).
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for quotegen-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Classify a reqwest error, keeping the query string (and therefore
    /// any `api_key` parameter) out of the message.
    pub(crate) fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            return Self::Timeout(format!("{context}: {err}"));
        }
        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return Self::Auth(format!("{context}: HTTP {status}"));
            }
        }
        Self::Http(format!("{context}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_auth() {
        let err = SearchError::Auth("HTTP 401 Unauthorized".into());
        assert_eq!(
            err.to_string(),
            "authentication error: HTTP 401 Unauthorized"
        );
    }

    #[test]
    fn display_api() {
        let err = SearchError::Api("Invalid API key.".into());
        assert_eq!(err.to_string(), "backend error: Invalid API key.");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("expected value at line 1".into());
        assert_eq!(err.to_string(), "parse error: expected value at line 1");
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("exceeded 10s limit".into());
        assert_eq!(err.to_string(), "search timed out: exceeded 10s limit");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("api key missing".into());
        assert_eq!(err.to_string(), "config error: api key missing");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
