// Configuration type definitions

use reqwest::Url;
use serde::Deserialize;

use crate::error::SearchError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_AUTOCOMPLETE_PATH: &str = "/items/search-autocomplete/";
pub const DEFAULT_RESULTS_PATH: &str = "/items/";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Search form and suggestion endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub autocomplete_path: String,
    pub results_path: String,
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    /// Drop lookup responses older than the last one applied
    pub discard_stale_responses: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            autocomplete_path: DEFAULT_AUTOCOMPLETE_PATH.to_string(),
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            discard_stale_responses: false,
        }
    }
}

/// Resolved URLs the application talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub autocomplete: Url,
    pub results: Url,
}

impl SearchConfig {
    /// Resolve the configured paths against `base_url`
    pub fn endpoints(&self) -> Result<Endpoints, SearchError> {
        let base = parse_url(&self.base_url)?;
        Ok(Endpoints {
            autocomplete: join_url(&base, &self.autocomplete_path)?,
            results: join_url(&base, &self.results_path)?,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, SearchError> {
    Url::parse(raw).map_err(|e| SearchError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })
}

fn join_url(base: &Url, path: &str) -> Result<Url, SearchError> {
    base.join(path).map_err(|e| SearchError::InvalidUrl {
        url: path.to_string(),
        message: e.to_string(),
    })
}

/// A category tab shown above the search form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabConfig {
    /// Value written to the page's `category` query parameter
    pub category: String,
    pub label: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}
