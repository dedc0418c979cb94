//! Remote language-model boundary
//!
//! The rest of the crate talks to the hosted model only through
//! [`LlmService`], so the Gemini client can be swapped for a mock in tests.

mod error;
mod gemini;
#[cfg(test)]
pub mod testing;
mod types;

pub use error::{LlmError, LlmErrorKind};
pub use gemini::{GeminiService, RemoteModel, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for the hosted model
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Generate the next model turn for a conversation
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Look up the configured model. Used to check reachability and credentials
    /// before a conversation is started.
    async fn describe_model(&self) -> Result<RemoteModel, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Logging wrapper for LLM services
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    turns = request.messages.len(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "LLM request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "LLM request failed"
                );
            }
        }

        result
    }

    async fn describe_model(&self) -> Result<RemoteModel, LlmError> {
        let result = self.inner.describe_model().await;
        match &result {
            Ok(model) => tracing::debug!(model = %model.name, "Model lookup succeeded"),
            Err(e) => tracing::warn!(
                model = %self.model_id,
                kind = ?e.kind,
                error = %e.message,
                "Model lookup failed"
            ),
        }
        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockLlmService;
    use super::*;

    #[tokio::test]
    async fn test_logging_service_passes_through() {
        let mock = Arc::new(MockLlmService::new("mock-model"));
        mock.queue_text("hi there");
        mock.queue_error(LlmError::rate_limit("slow down"));

        let service = LoggingService::new(mock.clone());
        assert_eq!(service.model_id(), "mock-model");

        let request = LlmRequest::new(vec![LlmMessage::user("hello")]);
        let ok = service.complete(&request).await.unwrap();
        assert_eq!(ok.text, "hi there");

        let err = service.complete(&request).await.unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::RateLimit);
        assert_eq!(mock.recorded_requests().len(), 2);
    }
}
