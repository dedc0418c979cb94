//! Conversation handle
//!
//! The hosted API keeps no server-side chat state, so the handle carries the
//! turn history itself and replays it on every request.

use crate::llm::{LlmError, LlmMessage, LlmRequest, LlmService};
use std::sync::Arc;
use uuid::Uuid;

/// Scripted model turn that follows the seed instruction
pub const ACKNOWLEDGMENT: &str = "Understood. I will follow the selected personality.";

/// Remote conversation state owned by exactly one session
pub struct Conversation {
    id: Uuid,
    service: Arc<dyn LlmService>,
    history: Vec<LlmMessage>,
}

impl Conversation {
    /// Look up the model and seed the history with the instruction and the
    /// scripted acknowledgment.
    pub async fn start(service: Arc<dyn LlmService>, instruction: &str) -> Result<Self, LlmError> {
        service.describe_model().await?;

        let id = Uuid::new_v4();
        tracing::info!(conversation = %id, model = %service.model_id(), "Conversation started");

        Ok(Self {
            id,
            service,
            history: vec![LlmMessage::user(instruction), LlmMessage::model(ACKNOWLEDGMENT)],
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn service(&self) -> Arc<dyn LlmService> {
        Arc::clone(&self.service)
    }

    /// Turns exchanged so far, seed turns included
    pub fn history(&self) -> &[LlmMessage] {
        &self.history
    }

    /// Send the next user turn. The history only grows when the model
    /// answers; a failed turn leaves it untouched.
    pub async fn send_message(&mut self, text: &str) -> Result<String, LlmError> {
        let mut messages = self.history.clone();
        messages.push(LlmMessage::user(text));
        let request = LlmRequest::new(messages);

        let response = self.service.complete(&request).await?;
        if response.text.is_empty() {
            return Err(LlmError::malformed("Response contained no text"));
        }

        self.history = request.messages;
        self.history.push(LlmMessage::model(response.text.clone()));
        Ok(response.text)
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("id", &self.id)
            .field("model", &self.service.model_id())
            .field("turns", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockLlmService;
    use crate::llm::{LlmErrorKind, MessageRole};

    #[tokio::test]
    async fn test_start_seeds_history() {
        let mock = Arc::new(MockLlmService::new("mock"));
        let conv = Conversation::start(mock, "Be nice.").await.unwrap();

        assert_eq!(
            conv.history(),
            [LlmMessage::user("Be nice."), LlmMessage::model(ACKNOWLEDGMENT)]
        );
    }

    #[tokio::test]
    async fn test_start_fails_when_model_lookup_fails() {
        let mock = Arc::new(MockLlmService::new("mock"));
        mock.fail_next_lookup(LlmError::auth("Authentication failed: bad key"));

        let err = Conversation::start(mock, "Be nice.").await.unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::Auth);
    }

    #[tokio::test]
    async fn test_send_replays_history() {
        let mock = Arc::new(MockLlmService::new("mock"));
        mock.queue_text("first");
        mock.queue_text("second");

        let mut conv = Conversation::start(mock.clone(), "Be nice.").await.unwrap();
        assert_eq!(conv.send_message("one").await.unwrap(), "first");
        assert_eq!(conv.send_message("two").await.unwrap(), "second");

        let requests = mock.recorded_requests();
        assert_eq!(requests[0].messages.len(), 3);
        assert_eq!(requests[1].messages.len(), 5);
        assert_eq!(requests[1].messages[3], LlmMessage::model("first"));
        assert_eq!(requests[1].last_text(), Some("two"));
        assert_eq!(conv.history().len(), 6);
        assert_eq!(conv.history()[5].role, MessageRole::Model);
    }

    #[tokio::test]
    async fn test_failed_send_leaves_history() {
        let mock = Arc::new(MockLlmService::new("mock"));
        mock.queue_error(LlmError::network("Connection failed"));

        let mut conv = Conversation::start(mock, "Be nice.").await.unwrap();
        let err = conv.send_message("hello").await.unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::Network);
        assert_eq!(conv.history().len(), 2);
    }
}
