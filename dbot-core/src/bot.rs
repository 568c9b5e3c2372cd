//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; `dbot-telegram` implements it via teloxide and tests substitute
//! recording fakes.

use crate::error::Result;
use crate::types::{Chat, Choice, Message};
use async_trait::async_trait;

/// Outbound side of the transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a threaded reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a text message carrying a set of labeled choices, one per row.
    async fn send_choices(&self, chat: &Chat, text: &str, choices: &[Choice]) -> Result<()>;
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| crate::error::DbotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
