//! Text-generation provider seam.
//!
//! The handler only depends on [`TextGenerator`]; [`GeminiClient`] is the
//! production implementation.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse provider response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// One generation call: which model, with which key, for which prompt.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub prompt: &'a str,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, ProviderError>;
}
