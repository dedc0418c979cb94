//! Displayed chat messages

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Author of a displayed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in the visible history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: DateTime<Local>,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// `HH:MM` label shown next to the message
    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_label_format() {
        let msg = Message::now(Role::User, "hi");
        let label = msg.clock_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.chars().nth(2), Some(':'));
        assert_eq!(label, msg.timestamp().format("%H:%M").to_string());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
