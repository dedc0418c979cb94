//! API request and response types

use crate::session::{Message, Personality, Role, Session};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Request to switch personality
#[derive(Debug, Deserialize)]
pub struct PersonalityRequest {
    pub personality: Personality,
}

/// A message as rendered by the page
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// `HH:MM`
    pub time: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            content: message.content().to_string(),
            timestamp: message.timestamp(),
            time: message.clock_label(),
        }
    }
}

/// Selector entry
#[derive(Debug, Serialize)]
pub struct PersonalityOption {
    pub name: Personality,
    pub instruction: &'static str,
}

/// Full session view
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub personality: Personality,
    pub personalities: Vec<PersonalityOption>,
    pub model: String,
    pub messages: Vec<MessageView>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            personality: session.personality(),
            personalities: Personality::ALL
                .into_iter()
                .map(|p| PersonalityOption {
                    name: p,
                    instruction: p.instruction(),
                })
                .collect(),
            model: session.conversation().service().model_id().to_string(),
            messages: session.messages().iter().map(MessageView::from).collect(),
        }
    }
}

/// Response for a successful chat turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub user: MessageView,
    pub reply: MessageView,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
