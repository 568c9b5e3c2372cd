//! Conversation controller: the per-session state machine behind every command, text and
//! callback. Persists classified sentences and answers `/show` queries through the injected
//! [`ClassifiedMessageStore`].

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dbot_core::{
    Bot, Callback, Chat, DbotError, Event, Handler, HandlerResponse, Message, Result,
};
use storage::{ClassifiedMessage, ClassifiedMessageStore, MessageQuery, Partition};
use tracing::{debug, error, info, instrument, warn};

use super::classify::{contains_word, single_word};
use super::replies::{self, MAX_MESSAGE_LEN, SHOW_WITHOUT_FILTER, SHOW_WITH_FILTER};
use super::sessions::SessionRegistry;
use super::state::{ConversationState, Mode};

/// Upper bounds for the two external dependencies.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub database: Duration,
    pub send: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            database: Duration::from_secs(10),
            send: Duration::from_secs(10),
        }
    }
}

async fn timed<T, E>(
    operation: &'static str,
    limit: Duration,
    fut: impl Future<Output = std::result::Result<T, E>>,
    wrap: impl FnOnce(E) -> DbotError,
) -> Result<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(wrap),
        Err(_) => Err(DbotError::Timeout {
            operation,
            elapsed: limit,
        }),
    }
}

fn database_error(e: storage::StorageError) -> DbotError {
    DbotError::Database(e.to_string())
}

pub struct ConversationController {
    bot: Arc<dyn Bot>,
    store: Arc<dyn ClassifiedMessageStore>,
    sessions: SessionRegistry,
    timeouts: Timeouts,
    stopped: AtomicBool,
}

impl ConversationController {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn ClassifiedMessageStore>,
        timeouts: Timeouts,
    ) -> Self {
        Self {
            bot,
            store,
            sessions: SessionRegistry::new(),
            timeouts,
            stopped: AtomicBool::new(false),
        }
    }

    /// Current state of a chat's conversation.
    pub async fn session(&self, chat_id: i64) -> ConversationState {
        self.sessions.snapshot(chat_id).await
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    async fn send(&self, chat: &Chat, text: &str) {
        let sent = timed(
            "send_message",
            self.timeouts.send,
            self.bot.send_message(chat, text),
            |e| e,
        )
        .await;
        if let Err(e) = sent {
            error!(error = %e, chat_id = chat.id, "Failed to send message");
        }
    }

    async fn reply(&self, message: &Message, text: &str) {
        let sent = timed(
            "reply_to",
            self.timeouts.send,
            self.bot.reply_to(message, text),
            |e| e,
        )
        .await;
        if let Err(e) = sent {
            error!(
                error = %e,
                chat_id = message.chat.id,
                message_id = %message.id,
                "Failed to send reply"
            );
        }
    }

    async fn handle_message(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.has_text() {
            debug!(
                chat_id = message.chat.id,
                message_type = %message.message_type,
                "Ignoring message without text"
            );
            return Ok(HandlerResponse::Ignore);
        }

        match message.command() {
            Some(command) => self.handle_command(message, command).await,
            None => {
                self.handle_text(message).await;
                Ok(HandlerResponse::Continue)
            }
        }
    }

    #[instrument(skip_all, fields(chat_id = message.chat.id, command = %command))]
    async fn handle_command(
        &self,
        message: &Message,
        command: &str,
    ) -> Result<HandlerResponse> {
        info!(user_id = message.user.id, "step: command received");

        match command {
            "start" => self.send(&message.chat, replies::WELCOME).await,
            "help" => self.send(&message.chat, replies::HELP).await,
            "filter" => {
                self.sessions
                    .with_session(message.chat.id, |s| s.mode = Mode::AwaitingFilterWord)
                    .await;
                self.send(&message.chat, replies::ASK_FILTER_WORD).await;
            }
            "show" => {
                let sent = timed(
                    "send_choices",
                    self.timeouts.send,
                    self.bot.send_choices(
                        &message.chat,
                        replies::CHOOSE_OPTION,
                        &replies::show_choices(),
                    ),
                    |e| e,
                )
                .await;
                if let Err(e) = sent {
                    error!(error = %e, "Failed to send show options");
                }
            }
            "stop" => return Ok(self.stop(&message.chat).await),
            _ => {
                debug!("Unknown command, classifying it as a sentence");
                self.classify(message).await;
            }
        }
        Ok(HandlerResponse::Continue)
    }

    async fn handle_text(&self, message: &Message) {
        let mode = self.sessions.snapshot(message.chat.id).await.mode;
        debug!(chat_id = message.chat.id, mode = %mode, "step: text received");

        match mode {
            Mode::Idle => self.classify(message).await,
            Mode::AwaitingFilterWord | Mode::AwaitingSearchWord => {
                self.receive_word(message).await
            }
        }
    }

    /// Consumes the text as the word the session was waiting for.
    async fn receive_word(&self, message: &Message) {
        let Some(word) = single_word(&message.content) else {
            self.sessions
                .with_session(message.chat.id, ConversationState::reject_word)
                .await;
            info!(chat_id = message.chat.id, "Rejected word: not exactly one token");
            self.send(&message.chat, replies::ONE_WORD_ONLY).await;
            return;
        };

        let consumed_by = self
            .sessions
            .with_session(message.chat.id, |s| s.accept_word(word))
            .await;
        info!(chat_id = message.chat.id, mode = %consumed_by, word = %word, "Word stored");

        match consumed_by {
            Mode::AwaitingFilterWord => self.reply(message, replies::FILTER_WORD_RECEIVED).await,
            Mode::AwaitingSearchWord => {
                self.reply(message, replies::SEARCH_WORD_RECEIVED).await;
                let query = MessageQuery::with_filter_word(Partition::WithWord, word);
                self.show_results(&message.chat, &query).await;
            }
            Mode::Idle => {}
        }
    }

    /// Classifies a sentence against the session's filter word, stores it, then replies.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn classify(&self, message: &Message) {
        let filter_word = self
            .sessions
            .snapshot(message.chat.id)
            .await
            .active_filter_word()
            .map(str::to_string);
        let Some(filter_word) = filter_word else {
            self.send(&message.chat, replies::NO_FILTER_WORD).await;
            return;
        };

        let found = contains_word(&message.content, &filter_word);
        let partition = Partition::for_match(found);
        let record = ClassifiedMessage::new(
            message.user.id,
            message.content.clone(),
            message.created_at,
            filter_word,
        );

        let stored = timed(
            "store",
            self.timeouts.database,
            self.store.store(&record, partition),
            database_error,
        )
        .await;
        match stored {
            Ok(()) => info!(partition = %partition, found, "step: message classified and stored"),
            Err(e) => error!(error = %e, partition = %partition, "Failed to store classified message"),
        }

        self.reply(message, replies::classification_reply(found))
            .await;
    }

    /// Runs `query` and sends the rows; a failed query reads as an empty result.
    async fn show_results(&self, chat: &Chat, query: &MessageQuery) {
        let rows = timed(
            "query",
            self.timeouts.database,
            self.store.query(query),
            database_error,
        )
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, partition = %query.partition, "Query failed");
            Vec::new()
        });
        info!(partition = %query.partition, rows = rows.len(), "step: sending query results");

        for chunk in replies::result_messages(&rows, MAX_MESSAGE_LEN) {
            self.send(chat, &chunk).await;
        }
    }

    async fn handle_callback(&self, callback: &Callback) -> Result<HandlerResponse> {
        info!(
            chat_id = callback.chat.id,
            user_id = callback.user.id,
            data = %callback.data,
            "step: callback received"
        );

        match callback.data.as_str() {
            SHOW_WITH_FILTER => {
                self.send(&callback.chat, replies::ASK_SEARCH_WORD).await;
                self.sessions
                    .with_session(callback.chat.id, |s| s.mode = Mode::AwaitingSearchWord)
                    .await;
            }
            SHOW_WITHOUT_FILTER => {
                let query = MessageQuery::all(Partition::WithoutWord);
                self.show_results(&callback.chat, &query).await;
            }
            other => {
                warn!(data = %other, "Unknown callback data");
                return Ok(HandlerResponse::Ignore);
            }
        }
        Ok(HandlerResponse::Continue)
    }

    /// Confirms, closes the store and stops. Only the first call does any of that; the close
    /// always runs to completion.
    async fn stop(&self, chat: &Chat) -> HandlerResponse {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return HandlerResponse::Stop;
        }
        info!(chat_id = chat.id, "step: stop requested");
        self.send(chat, replies::STOPPING).await;

        // Unbounded: the store marks itself closed before the pool has finished closing.
        self.store.close().await;
        info!("Store closed");
        HandlerResponse::Stop
    }
}

#[async_trait]
impl Handler for ConversationController {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        if self.is_stopped() {
            debug!(kind = event.kind(), chat_id = event.chat_id(), "Stopped, dropping event");
            return Ok(HandlerResponse::Stop);
        }

        match event {
            Event::Message(message) => self.handle_message(message).await,
            Event::Callback(callback) => self.handle_callback(callback).await,
        }
    }
}
