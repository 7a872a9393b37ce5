//! Bedrock-hosted Anthropic model adapter.
//!
//! Implements the `RecipeModel` port against the Bedrock runtime's
//! `invoke` endpoint using the Anthropic messages payload. Non-streaming:
//! one request, one block of generated text.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::ports::{GenerationRequest, ModelError, RecipeModel};

/// Payload version expected by the Bedrock-hosted Anthropic runtime.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Model provider adapter for the Bedrock runtime.
pub struct BedrockProvider {
    api_key: Secret<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
    client: Client,
}

impl BedrockProvider {
    /// Creates a provider from explicit configuration.
    pub fn new(config: &AiConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        Ok(Self {
            api_key: Secret::new(config.api_key.clone()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn invoke_url(&self) -> String {
        format!("{}/model/{}/invoke", self.base_url, self.model)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout(self.timeout_secs)
        } else {
            ModelError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl RecipeModel for BedrockProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelError> {
        let body = InvokeRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: request.max_tokens,
            messages: vec![Message {
                role: "user",
                content: request.prompt,
            }],
        };

        let response = self
            .client
            .post(self.invoke_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "model invocation failed");
            return Err(ModelError::Provider(text));
        }

        let payload: InvokeResponse = response
            .json()
            .await
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        let text = payload
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| {
                ModelError::MalformedResponse("response contained no text block".to_string())
            })?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct InvokeRequest {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AiConfig {
        AiConfig {
            api_key: "token".to_string(),
            model: "anthropic.claude-3-sonnet-20240229-v1:0".to_string(),
            base_url: "https://bedrock-runtime.us-west-2.amazonaws.com/".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn invoke_url_embeds_model_id() {
        let provider = BedrockProvider::new(&config()).unwrap();
        assert_eq!(
            provider.invoke_url(),
            "https://bedrock-runtime.us-west-2.amazonaws.com/model/anthropic.claude-3-sonnet-20240229-v1:0/invoke"
        );
    }

    #[test]
    fn response_payload_extracts_first_text_block() {
        let payload: InvokeResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"A recipe."}],"stop_reason":"end_turn"}"#,
        )
        .unwrap();
        let text = payload.content.into_iter().find_map(|b| b.text).unwrap();
        assert_eq!(text, "A recipe.");
    }

    #[test]
    fn empty_content_is_malformed() {
        let payload: InvokeResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(payload.content.into_iter().find_map(|b| b.text).is_none());
    }
}
