//! Conversation forwarder
//!
//! Wraps each user message with the session's personality instruction and
//! sends it as the next turn of the remote conversation. Failures are
//! returned to the caller unchanged; nothing is retried.

use crate::llm::LlmError;
use crate::session::{Message, Role, Session};

/// Build the turn text sent to the model
pub fn compose_turn(instruction: &str, user_text: &str) -> String {
    format!("{instruction}\nUser: {user_text}")
}

/// Forward `user_text` and return the model's reply. The text is passed
/// through as-is, empty or not.
pub async fn send(session: &mut Session, user_text: &str) -> Result<String, LlmError> {
    let turn = compose_turn(session.personality_instruction(), user_text);
    let conversation = session.conversation_mut();
    let id = conversation.id();

    match conversation.send_message(&turn).await {
        Ok(reply) => {
            tracing::debug!(conversation = %id, reply_chars = reply.len(), "Turn completed");
            Ok(reply)
        }
        Err(e) => {
            tracing::warn!(conversation = %id, kind = ?e.kind, error = %e, "Turn failed");
            Err(e)
        }
    }
}

/// The two messages recorded by a successful turn
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: Message,
    pub reply: Message,
}

/// Run one user action end to end: record the user message, forward it, and
/// record the reply. On failure the user message stays in the history with
/// no assistant reply after it.
pub async fn submit_turn(session: &mut Session, user_text: &str) -> Result<Exchange, LlmError> {
    let user = session.append_message(Role::User, user_text);
    let reply = send(session, user_text).await?;
    let reply = session.append_message(Role::Assistant, reply);
    Ok(Exchange { user, reply })
}
