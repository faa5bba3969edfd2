//! HTTP client for the text generation service.
//!
//! One request per prompt, no streaming:
//!
//! ```text
//! POST {base_url}/generate_text   {"seed_text": "...", "next_words": 8}
//!   200 → {"generated_text": "..."}
//! ```
//!
//! No retries and no timeout. A request that never resolves keeps the
//! caller waiting.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::generation::{ErrorDetail, GenerateRequest, GenerateResponse, GenerationError, TextGenerator};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

pub struct HttpGenerator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/generate_text", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for HttpGenerator {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError> {
        info!(
            "Generation request: seed_len={}, next_words={}",
            request.seed_text.len(),
            request.next_words
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        debug!("Generation response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Generation service error: {} - {}", status, err_body);
            return Err(GenerationError::Api {
                status,
                message: ErrorDetail::describe(&err_body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Parse(e.to_string()))?;

        info!("Generation complete: {} bytes", parsed.generated_text.len());
        Ok(parsed.generated_text)
    }

    async fn is_reachable(&self) -> bool {
        match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(resp) => {
                debug!("Health probe status: {}", resp.status());
                resp.status().is_success()
            }
            Err(e) => {
                warn!("Health probe failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let generator = HttpGenerator::new("http://localhost:8000/");
        assert_eq!(generator.name(), "http://localhost:8000");
        assert_eq!(generator.generate_url(), "http://localhost:8000/generate_text");
    }

    #[test]
    fn name_is_base_url() {
        let generator = HttpGenerator::new(DEFAULT_ENDPOINT);
        assert_eq!(generator.name(), DEFAULT_ENDPOINT);
    }
}
