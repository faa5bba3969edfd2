use std::fmt;

use async_trait::async_trait;

use super::types::GenerateRequest;

/// Errors that can occur while talking to the generation service.
///
/// The UI collapses all of these into a single "generation failed" message;
/// the variants only exist so the log says what actually went wrong.
#[derive(Debug)]
pub enum GenerationError {
    /// Transport failure (connection refused, DNS, reset).
    Network(String),
    /// The service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body did not match `{ "generated_text": string }`.
    Parse(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Network(msg) => write!(f, "network error: {msg}"),
            GenerationError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GenerationError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short name used in logs and the title bar.
    fn name(&self) -> &str;

    /// Asks the service to continue `request.seed_text` by `request.next_words` words.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError>;

    /// Whether the service answers at all. Never fails; errors count as unreachable.
    async fn is_reachable(&self) -> bool;
}
