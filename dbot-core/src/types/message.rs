//! Inbound text message and slash-command parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single inbound message. `content` is empty for messages without text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    /// When the transport says the message was sent.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the command name when the message starts with `/name`. A `@botname` suffix is
    /// dropped, and anything after the first whitespace is ignored.
    pub fn command(&self) -> Option<&str> {
        let rest = self.content.strip_prefix('/')?;
        let head = rest.split(char::is_whitespace).next().unwrap_or(rest);
        let name = head.split('@').next().unwrap_or(head);
        if name.is_empty() {
            return None;
        }
        Some(name)
    }

    pub fn has_text(&self) -> bool {
        !self.content.is_empty()
    }
}
