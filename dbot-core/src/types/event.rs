//! Inbound event: the unit the event loop consumes.

use super::{callback::Callback, message::Message};

/// Either a text message (possibly a command) or a callback from an inline choice.
#[derive(Debug, Clone)]
pub enum Event {
    Message(Message),
    Callback(Callback),
}

impl Event {
    /// Chat the event belongs to; used as the session key.
    pub fn chat_id(&self) -> i64 {
        match self {
            Event::Message(message) => message.chat.id,
            Event::Callback(callback) => callback.chat.id,
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            Event::Message(message) => message.user.id,
            Event::Callback(callback) => callback.user.id,
        }
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Callback(_) => "callback",
        }
    }
}
