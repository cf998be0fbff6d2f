//! HTTP suggestion source
//!
//! `GET <endpoint>?q=<query>` returning `{"suggestions": [...]}`.

use std::time::Duration;

use reqwest::{Client, Url};

use super::{LookupError, SuggestionSource};
use crate::error::SearchError;
use crate::suggest::{Suggestion, parse_suggestions};

const QUERY_PARAM: &str = "q";

#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: Client,
    endpoint: Url,
}

impl HttpSuggestionSource {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::HttpClient(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Endpoint URL with the query appended, percent-encoded
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, query);
        url
    }
}

impl SuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let url = self.request_url(query);
        log::debug!("Lookup GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
