//! Mock model provider for testing.
//!
//! Configurable to return queued responses or inject errors, with call
//! tracking for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationRequest, ModelError, RecipeModel};

/// Mock `RecipeModel` for tests.
///
/// Responses are consumed in order; an exhausted queue fails the
/// request, which keeps tests honest about how many invocations they
/// expect.
#[derive(Debug, Clone, Default)]
pub struct MockRecipeModel {
    responses: Arc<Mutex<VecDeque<Result<String, ModelError>>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockRecipeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful generation.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.into()));
        self
    }

    /// Queues a provider failure.
    pub fn with_error(self, error: ModelError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests seen so far, in order.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RecipeModel for MockRecipeModel {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ModelError::Provider(
                    "mock: no response configured".to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let model = MockRecipeModel::new()
            .with_response("first")
            .with_response("second");

        let a = model.generate(GenerationRequest::new("p1", 10)).await.unwrap();
        let b = model.generate(GenerationRequest::new("p2", 10)).await.unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("first", "second"));
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn exhausted_queue_fails() {
        let model = MockRecipeModel::new();
        assert!(model
            .generate(GenerationRequest::new("p", 10))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn records_request_prompts() {
        let model = MockRecipeModel::new().with_response("ok");
        model
            .generate(GenerationRequest::new("egg, flour", 1024))
            .await
            .unwrap();
        assert_eq!(model.calls()[0].prompt, "egg, flour");
        assert_eq!(model.calls()[0].max_tokens, 1024);
    }
}
