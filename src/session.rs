//! Chat session state
//!
//! A [`Session`] is an explicit value owned by whoever drives the UI. It
//! changes only through three transitions: [`Session::initialize`],
//! [`Session::append_message`] and [`Session::clear`].

mod conversation;
mod message;
mod personality;

pub use conversation::{Conversation, ACKNOWLEDGMENT};
pub use message::{Message, Role};
pub use personality::{Personality, UnknownPersonality};

use crate::llm::{LlmError, LlmService};
use std::sync::Arc;

/// Synthetic assistant message every session starts with
pub const GREETING: &str = "Hello! How can I assist you today?";

/// The visible history plus the remote conversation behind it
#[derive(Debug)]
pub struct Session {
    personality: Personality,
    messages: Vec<Message>,
    conversation: Conversation,
}

impl Session {
    /// Start a fresh session. Fails if the model cannot be reached or the
    /// credentials are rejected.
    pub async fn initialize(
        personality: Personality,
        service: Arc<dyn LlmService>,
    ) -> Result<Self, LlmError> {
        let conversation = Conversation::start(service, personality.instruction()).await?;

        Ok(Self {
            personality,
            messages: vec![Message::now(Role::Assistant, GREETING)],
            conversation,
        })
    }

    /// Append a message stamped with the current time and return a copy of
    /// it. History is unbounded.
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) -> Message {
        let message = Message::now(role, content);
        self.messages.push(message.clone());
        message
    }

    /// Replace this session with a freshly initialized one. On failure the
    /// current session is kept as-is.
    pub async fn clear(&mut self, personality: Personality) -> Result<(), LlmError> {
        let fresh = Session::initialize(personality, self.conversation.service()).await?;
        tracing::info!(
            old = %self.conversation.id(),
            new = %fresh.conversation.id(),
            personality = %personality,
            dropped_messages = self.messages.len(),
            "Session reset"
        );
        *self = fresh;
        Ok(())
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn personality_instruction(&self) -> &'static str {
        self.personality.instruction()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub(crate) fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }
}
