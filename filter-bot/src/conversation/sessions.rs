//! Conversation state keyed by chat id, created lazily on first use.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::state::ConversationState;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<i64, ConversationState>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the chat's state, creating a zero-valued state first if needed.
    pub async fn with_session<R>(
        &self,
        chat_id: i64,
        f: impl FnOnce(&mut ConversationState) -> R,
    ) -> R {
        let mut sessions = self.sessions.lock().await;
        f(sessions.entry(chat_id).or_default())
    }

    /// Copy of the chat's state; a default state when the chat was never seen.
    pub async fn snapshot(&self, chat_id: i64) -> ConversationState {
        self.sessions
            .lock()
            .await
            .get(&chat_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
