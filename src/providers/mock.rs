#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::error::{AgentError, Result};
use crate::core::llm::LanguageModel;
use crate::core::types::{CompletionRequest, CompletionResponse, Message, StopReason, Usage};

/// Queued-response model for exercising the agent loop without a network.
/// Clones share the queue and the recorded request history.
#[derive(Clone)]
pub struct MockLanguageModel {
    name: String,
    model: String,
    responses: Arc<Mutex<Vec<String>>>,
    request_history: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLanguageModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            model: "mock-model".to_string(),
            responses: Arc::new(Mutex::new(Vec::new())),
            request_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("MockLanguageModel mutex poisoned")
            .push(text.into());
        self
    }

    #[must_use]
    pub fn request_history(&self) -> Vec<CompletionRequest> {
        self.request_history
            .lock()
            .expect("MockLanguageModel mutex poisoned")
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_history
            .lock()
            .expect("MockLanguageModel mutex poisoned")
            .len()
    }

    fn next_response(&self) -> Result<String> {
        let mut responses = self
            .responses
            .lock()
            .expect("MockLanguageModel mutex poisoned");
        if responses.is_empty() {
            Err(AgentError::Provider(
                "MockLanguageModel: no responses queued".to_string(),
            ))
        } else {
            Ok(responses.remove(0))
        }
    }
}

impl Default for MockLanguageModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.request_history
            .lock()
            .expect("MockLanguageModel mutex poisoned")
            .push(request);

        let text = self.next_response()?;

        Ok(CompletionResponse::new(
            Message::assistant(text),
            StopReason::EndTurn,
            Usage::new(10, 5),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_responses_in_order() {
        let mock = MockLanguageModel::new()
            .with_response("first")
            .with_response("second");

        let request = CompletionRequest::new(vec![Message::user("test")]);

        let response = mock.complete(request.clone()).await.unwrap();
        assert_eq!(response.message.content, "first");

        let response = mock.complete(request).await.unwrap();
        assert_eq!(response.message.content, "second");
    }

    #[tokio::test]
    async fn test_mock_errors_when_exhausted() {
        let mock = MockLanguageModel::new();
        let request = CompletionRequest::new(vec![Message::user("test")]);
        let result = mock.complete(request).await;
        assert!(matches!(result, Err(AgentError::Provider(_))));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockLanguageModel::new().with_response("hi");

        assert_eq!(mock.request_count(), 0);

        let request = CompletionRequest::new(vec![Message::user("hello")]);
        mock.complete(request).await.unwrap();

        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.request_history()[0].messages[0].content, "hello");
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let mock = MockLanguageModel::new().with_response("only");
        let clone = mock.clone();

        let request = CompletionRequest::new(vec![Message::user("q")]);
        clone.complete(request).await.unwrap();

        assert_eq!(mock.request_count(), 1);
    }
}
