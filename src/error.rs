use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for cozyyu-search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
