//! Backend configuration with sensible defaults.
//!
//! [`SearchConfig`] controls transport behaviour shared by every backend:
//! timeouts, safe search, and the User-Agent header.

use crate::error::SearchError;

/// Transport configuration shared by all backends.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether to request safe search filtering from backends that support it.
    /// Off by default so plain queries match what the backend would return
    /// to an unfiltered search.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, API backends send
    /// `quotegen/<version>` and the scraper rotates browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            safe_search: false,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.trim().is_empty())
        {
            return Err(SearchError::Config("user_agent must not be blank".into()));
        }
        Ok(())
    }
}
