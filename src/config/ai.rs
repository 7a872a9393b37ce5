//! AI model provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI model provider configuration (Bedrock-hosted Anthropic model)
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Bearer token for the model runtime API
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the model runtime
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("AI__API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_model() -> String {
    "anthropic.claude-3-sonnet-20240229-v1:0".to_string()
}

fn default_base_url() -> String {
    "https://bedrock-runtime.us-west-2.amazonaws.com".to_string()
}

fn default_timeout() -> u64 {
    30
}
