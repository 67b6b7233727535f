//! HTTP clients for the search backends.
//!
//! SerpAPI is a keyed JSON API and gets a plainly identified client.
//! DuckDuckGo's HTML endpoint expects a browser, so the scraper gets a
//! rotating browser User-Agent and a cookie jar for its session cookie.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// User-Agent sent to JSON APIs.
pub const API_USER_AGENT: &str = concat!("quotegen/", env!("CARGO_PKG_VERSION"));

/// Browser User-Agents rotated per scraper client.
const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// How a backend presents itself over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientProfile {
    /// Keyed JSON API: fixed `quotegen/<version>` UA, no cookies.
    Api,
    /// HTML scraping: rotating browser UA, cookie store.
    Browser,
}

impl ClientProfile {
    /// The User-Agent this profile sends; a configured UA always wins.
    pub fn user_agent(self, config: &SearchConfig) -> String {
        if let Some(custom) = &config.user_agent {
            return custom.clone();
        }
        match self {
            Self::Api => API_USER_AGENT.to_owned(),
            Self::Browser => random_browser_user_agent().to_owned(),
        }
    }

    fn keeps_cookies(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Build a [`reqwest::Client`] for one backend.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(
    config: &SearchConfig,
    profile: ClientProfile,
) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .cookie_store(profile.keeps_cookies())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(profile.user_agent(config))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

fn random_browser_user_agent() -> &'static str {
    BROWSER_USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(BROWSER_USER_AGENTS[0])
}
