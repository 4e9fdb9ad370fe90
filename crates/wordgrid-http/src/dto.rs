//! Request and response bodies for the word finder API.
//!
//! Field names are camelCase on the wire:
//!
//! ```json
//! { "matrix": ["chill", "coldw", "windd"], "wordStream": ["chill", "cold"] }
//! ```

use serde::{Deserialize, Serialize};

/// Body returned instead of an empty list when nothing matched.
pub const NO_MATCHES: &str = "No words were found in the matrix.";

/// Body of `POST /api/wordfinder/find`.
///
/// Both fields are optional so that a missing or `null` value reaches
/// validation and gets its own error message rather than a JSON rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequest {
    /// Grid rows, top to bottom.
    pub matrix: Option<Vec<String>>,
    /// Words to search for.
    pub word_stream: Option<Vec<String>>,
}

impl FindRequest {
    pub fn new<R, W>(matrix: R, word_stream: W) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            matrix: Some(matrix.into_iter().map(Into::into).collect()),
            word_stream: Some(word_stream.into_iter().map(Into::into).collect()),
        }
    }
}

/// Successful response: either the ranked words or the no-match message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FindResponse {
    Words(Vec<String>),
    Message(String),
}

impl FindResponse {
    pub fn from_words(words: Vec<String>) -> Self {
        if words.is_empty() {
            FindResponse::Message(NO_MATCHES.to_string())
        } else {
            FindResponse::Words(words)
        }
    }
}

/// Body of every 4xx/5xx response produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
