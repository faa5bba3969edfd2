//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::generation::{GenerateRequest, GenerationError, TextGenerator};

/// A generator that answers every request with a fixed result, without I/O.
pub struct StubGenerator {
    pub reply: Option<String>,
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError> {
        match &self.reply {
            Some(reply) => Ok(format!("{} {}", request.seed_text, reply)),
            None => Err(GenerationError::Network("stub refuses".to_string())),
        }
    }

    async fn is_reachable(&self) -> bool {
        self.reply.is_some()
    }
}

pub fn stub_generator() -> Arc<dyn TextGenerator> {
    Arc::new(StubGenerator {
        reply: Some("and more".to_string()),
    })
}

/// Creates a test App with a stub generator.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(stub_generator(), "http://test".to_string())
}
