//! Configuration types for quotegen.
//!
//! Loaded from TOML; every section falls back to defaults for missing
//! fields, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use quotegen_search::{AnyBackend, BackendKind, SearchConfig};

use crate::error::{QuoteError, Result};
use crate::extract::ExtractionMode;
use crate::queries::QueryPlan;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Search backend settings.
    pub search: SearchSettings,
    /// Collection (orchestrator) settings.
    pub collect: CollectConfig,
    /// Snippet extraction settings.
    pub extract: ExtractConfig,
}

/// Which backend to use and how to reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Backend to query.
    pub backend: BackendKind,
    /// Explicit API key. Prefer `api_key_env` so keys stay out of files.
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    /// Locale/region hint sent with every query.
    pub region: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Request safe-search filtering where supported.
    pub safe_search: bool,
    /// Custom User-Agent; rotates built-in browser UAs when unset.
    pub user_agent: Option<String>,
    /// Override the backend endpoint (mock servers, proxies).
    pub base_url: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::SerpApi,
            api_key: None,
            api_key_env: "SERPAPI_API_KEY".to_owned(),
            region: quotegen_search::types::DEFAULT_REGION.to_owned(),
            timeout_seconds: 10,
            safe_search: false,
            user_agent: None,
            base_url: None,
        }
    }
}

impl SearchSettings {
    /// The explicit key if set, else the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    /// Transport settings for the search crate.
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            timeout_seconds: self.timeout_seconds,
            safe_search: self.safe_search,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Build the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Search`] when the backend needs a key that
    /// cannot be resolved, or the transport settings are invalid.
    pub fn build_backend(&self) -> Result<AnyBackend> {
        let key = self.resolve_api_key();
        let backend = AnyBackend::from_kind(
            self.backend,
            key.as_deref(),
            self.base_url.as_deref(),
            &self.to_search_config(),
        )?;
        Ok(backend)
    }
}

/// Orchestrator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Number of distinct quotes to collect.
    pub target: usize,
    /// Result bound for each template query.
    pub results_per_query: usize,
    /// Result bound for the broader fallback query.
    pub fallback_results: usize,
    /// Upper bound on a single backend call, in seconds.
    pub query_timeout_seconds: u64,
    /// Top up from the built-in curated set (tagged as curated) when short.
    pub include_curated: bool,
    /// Query templates.
    pub queries: QueryPlan,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            target: 5,
            results_per_query: 15,
            fallback_results: 20,
            query_timeout_seconds: 15,
            include_curated: false,
            queries: QueryPlan::default(),
        }
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Rule set to use.
    pub mode: ExtractionMode,
}

impl QuoteConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| QuoteError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| QuoteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/quotegen/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("quotegen").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("quotegen")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/quotegen-config/config.toml")
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        let c = &self.collect;
        if c.target == 0 {
            return Err(QuoteError::Config("target must be greater than 0".into()));
        }
        if c.results_per_query == 0 || c.fallback_results == 0 {
            return Err(QuoteError::Config(
                "results_per_query and fallback_results must be greater than 0".into(),
            ));
        }
        if c.query_timeout_seconds == 0 || self.search.timeout_seconds == 0 {
            return Err(QuoteError::Config("timeouts must be greater than 0".into()));
        }
        if c.queries.templates.is_empty() {
            return Err(QuoteError::Config(
                "at least one query template is required".into(),
            ));
        }
        let missing = c.queries.templates_missing_topic();
        if !missing.is_empty() {
            return Err(QuoteError::Config(format!(
                "query templates missing {{topic}}: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}
