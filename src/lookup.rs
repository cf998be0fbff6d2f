//! Suggestion lookups
//!
//! Defines the messages exchanged with the lookup worker, the
//! [`SuggestionSource`] seam and its HTTP implementation.

use std::future::Future;

use thiserror::Error;

use crate::suggest::Suggestion;

mod http;
mod worker;

pub use http::HttpSuggestionSource;
pub use worker::spawn_worker;

/// Errors that can occur while looking up suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Network unreachable, timeout or broken connection
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status {code}")]
    Status { code: u16 },

    /// Response body is not JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Lookup sent to the worker when the debounce timer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: String,
    /// Sequence number of this lookup, wrapping
    pub request_id: u64,
}

/// Outcome of one lookup, delivered back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub request_id: u64,
    pub result: Result<Vec<Suggestion>, LookupError>,
}

/// Anything that can answer a suggestion query
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, LookupError>> + Send;
}
