//! Suggestion records and response decoding

use serde::Deserialize;
use serde_json::Value;

use crate::lookup::LookupError;

/// One completion candidate returned by the suggestion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub text: String,
    /// Category label shown next to the text ("товар", "стиль", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }
}

/// Decode an endpoint response body
///
/// A body that is not JSON is a parse failure. A JSON body whose
/// `suggestions` field is absent, null or not an array means "no
/// suggestions". Array elements that are not objects are skipped.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    let json: Value = serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    let Some(Value::Array(entries)) = json.get("suggestions") else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| Suggestion::deserialize(entry).ok())
        .collect())
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
