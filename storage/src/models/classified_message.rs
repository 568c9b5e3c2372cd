//! Classified message model for persistence.
//!
//! One row of either partition table; used for inserts and query results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClassifiedMessage {
    /// Telegram user id of the sender.
    pub sender_id: i64,
    pub message_text: String,
    pub sent_date: DateTime<Utc>,
    /// Filter word active when the message was classified, original casing.
    pub filter_word: String,
}

impl ClassifiedMessage {
    pub fn new(
        sender_id: i64,
        message_text: impl Into<String>,
        sent_date: DateTime<Utc>,
        filter_word: impl Into<String>,
    ) -> Self {
        Self {
            sender_id,
            message_text: message_text.into(),
            sent_date,
            filter_word: filter_word.into(),
        }
    }
}
