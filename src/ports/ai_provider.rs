//! AI model port for recipe text generation.

use async_trait::async_trait;
use thiserror::Error;

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Full prompt text, ingredient list already embedded.
    pub prompt: String,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Errors surfaced by the model provider.
///
/// Callers treat every variant as a failed generation; the variants
/// exist for diagnostics, not for branching.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Non-success response from the provider, raw error text attached.
    #[error("Model provider error: {0}")]
    Provider(String),

    /// The provider answered 2xx but the payload was not the expected
    /// shape.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure.
    #[error("Network error calling model provider: {0}")]
    Network(String),

    /// The bounded wait elapsed.
    #[error("Model request timed out after {0} seconds")]
    Timeout(u64),
}

/// Port for AI text generation.
///
/// Implementations return the raw generated text, unstructured.
#[async_trait]
pub trait RecipeModel: Send + Sync {
    /// Generate text for the given prompt.
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelError>;
}
