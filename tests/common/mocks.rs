use aipermit::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, LlmClient},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
///
/// Outcomes are returned in order; requests are recorded so tests can inspect
/// the prompt after the client has been moved into a `Summarizer`.
pub struct MockLlmClient {
    pub outcomes: Arc<Mutex<Vec<Result<ChatCompletionResponse>>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: ChatCompletionResponse) -> Self {
        self.outcomes.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.outcomes.lock().unwrap().push(Err(error));
        self
    }

    pub fn requests_handle(&self) -> Arc<Mutex<Vec<ChatCompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            panic!("MockLlmClient: no more responses configured");
        }

        outcomes.remove(0)
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
