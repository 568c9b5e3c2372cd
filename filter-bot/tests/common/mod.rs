//! Shared fakes for controller tests: a recording [`Bot`] and an in-memory store.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use dbot_core::{Bot, Callback, Chat, Choice, DbotError, Event, Message, Result, User};
use filter_bot::{ConversationController, Timeouts};
use storage::{ClassifiedMessage, ClassifiedMessageStore, MessageQuery, Partition, StorageError};

/// One outbound call seen by [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
    },
    Reply {
        chat_id: i64,
        reply_to: String,
        text: String,
    },
    Choices {
        chat_id: i64,
        text: String,
        choices: Vec<Choice>,
    },
}

impl Sent {
    pub fn text(&self) -> &str {
        match self {
            Sent::Message { text, .. } | Sent::Reply { text, .. } | Sent::Choices { text, .. } => {
                text
            }
        }
    }

    pub fn chat_id(&self) -> i64 {
        match self {
            Sent::Message { chat_id, .. }
            | Sent::Reply { chat_id, .. }
            | Sent::Choices { chat_id, .. } => *chat_id,
        }
    }
}

/// Bot that records every send. `fail_sends` makes every call return a transport error.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_sends: AtomicBool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().iter().map(|s| s.text().to_string()).collect()
    }

    /// Drains the record; later calls only see newer sends.
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    fn record(&self, sent: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(sent);
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Sent::Reply {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        })
    }

    async fn send_choices(&self, chat: &Chat, text: &str, choices: &[Choice]) -> Result<()> {
        self.record(Sent::Choices {
            chat_id: chat.id,
            text: text.to_string(),
            choices: choices.to_vec(),
        })
    }
}

/// In-memory store with the same query semantics as the SQLite one.
#[derive(Default)]
pub struct MockStore {
    rows: Mutex<Vec<(Partition, ClassifiedMessage)>>,
    queries: Mutex<Vec<MessageQuery>>,
    closes: AtomicUsize,
    fail: AtomicBool,
    hang: AtomicBool,
    close_delay: Mutex<Option<Duration>>,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rows(&self) -> Vec<(Partition, ClassifiedMessage)> {
        self.rows.lock().unwrap().clone()
    }

    pub fn rows_in(&self, partition: Partition) -> Vec<ClassifiedMessage> {
        self.rows()
            .into_iter()
            .filter(|(p, _)| *p == partition)
            .map(|(_, row)| row)
            .collect()
    }

    pub fn queries(&self) -> Vec<MessageQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Every store and query fails with a database error.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Every store and query waits far longer than any test timeout.
    pub fn set_hang(&self, hang: bool) {
        self.hang.store(hang, Ordering::SeqCst);
    }

    /// `close` sleeps for `delay` before it records the close.
    pub fn set_close_delay(&self, delay: Duration) {
        *self.close_delay.lock().unwrap() = Some(delay);
    }

    async fn check(&self) -> std::result::Result<(), StorageError> {
        if self.hang.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::Database("database is locked".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ClassifiedMessageStore for MockStore {
    async fn store(
        &self,
        message: &ClassifiedMessage,
        partition: Partition,
    ) -> std::result::Result<(), StorageError> {
        self.check().await?;
        self.rows.lock().unwrap().push((partition, message.clone()));
        Ok(())
    }

    async fn query(
        &self,
        query: &MessageQuery,
    ) -> std::result::Result<Vec<ClassifiedMessage>, StorageError> {
        self.queries.lock().unwrap().push(query.clone());
        self.check().await?;
        let mut rows: Vec<ClassifiedMessage> = self
            .rows_in(query.partition)
            .into_iter()
            .filter(|row| match &query.filter_word {
                Some(word) => &row.filter_word == word,
                None => true,
            })
            .collect();
        rows.sort_by_key(|row| row.sent_date);
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn close(&self) {
        let delay = *self.close_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

pub const CHAT_ID: i64 = 100;
pub const USER_ID: i64 = 42;

pub fn controller(bot: Arc<MockBot>, store: Arc<MockStore>) -> ConversationController {
    ConversationController::new(bot, store, test_timeouts())
}

pub fn test_timeouts() -> Timeouts {
    Timeouts {
        database: Duration::from_millis(200),
        send: Duration::from_millis(200),
    }
}

pub fn sent_at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap()
}

pub fn chat(chat_id: i64) -> Chat {
    Chat {
        id: chat_id,
        chat_type: "private".to_string(),
    }
}

pub fn user(user_id: i64) -> User {
    User {
        id: user_id,
        username: Some("tester".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

/// Text message in `chat_id`; ids count up so replies can be matched.
pub fn text_in(chat_id: i64, id: u32, content: &str) -> Event {
    Event::Message(Message {
        id: id.to_string(),
        user: user(USER_ID),
        chat: chat(chat_id),
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: sent_at(id % 60),
    })
}

pub fn text(id: u32, content: &str) -> Event {
    text_in(CHAT_ID, id, content)
}

/// Message the transport delivered without text (sticker, photo).
pub fn sticker(id: u32) -> Event {
    Event::Message(Message {
        id: id.to_string(),
        user: user(USER_ID),
        chat: chat(CHAT_ID),
        content: String::new(),
        message_type: "other".to_string(),
        created_at: sent_at(0),
    })
}

pub fn callback_in(chat_id: i64, data: &str) -> Event {
    Event::Callback(Callback {
        user: user(USER_ID),
        chat: chat(chat_id),
        data: data.to_string(),
        message_id: Some("7".to_string()),
    })
}

pub fn callback(data: &str) -> Event {
    callback_in(CHAT_ID, data)
}
