//! Mock model service for tests

use super::{LlmError, LlmRequest, LlmResponse, LlmService, RemoteModel};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock service that returns queued responses
pub struct MockLlmService {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    lookup_failures: Mutex<VecDeque<LlmError>>,
    model_id: String,
    /// Record of all requests made
    pub requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmService {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            lookup_failures: Mutex::new(VecDeque::new()),
            model_id: model_id.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: LlmResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a successful plain-text response
    pub fn queue_text(&self, text: &str) {
        self.queue_response(LlmResponse::from_text(text));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Make the next `describe_model` call fail
    pub fn fail_next_lookup(&self, error: LlmError) {
        self.lookup_failures.lock().unwrap().push_back(error);
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    async fn describe_model(&self) -> Result<RemoteModel, LlmError> {
        if let Some(error) = self.lookup_failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        Ok(RemoteModel {
            name: format!("models/{}", self.model_id),
            display_name: self.model_id.clone(),
            supported_generation_methods: vec!["generateContent".to_string()],
        })
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
