use serde::{Deserialize, Serialize};

use crate::core::next_words::NextWords;

/// Body of `POST /generate_text`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub seed_text: String,
    pub next_words: NextWords,
}

impl GenerateRequest {
    pub fn new(seed_text: impl Into<String>, next_words: NextWords) -> Self {
        Self {
            seed_text: seed_text.into(),
            next_words,
        }
    }
}

/// Successful response of `POST /generate_text`.
#[derive(Deserialize, Debug)]
pub struct GenerateResponse {
    pub generated_text: String,
}

/// Error body the service sends with a 5xx, e.g. `{"detail": "Model not initialized"}`.
#[derive(Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Pulls a readable message out of an error body, falling back to the raw text.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ErrorDetail>(body) {
            Ok(ErrorDetail {
                detail: serde_json::Value::String(s),
            }) => s,
            Ok(ErrorDetail { detail }) => detail.to_string(),
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}
