//! Sequential event loop: one consumer drains an ordered queue, handling each event to
//! completion before receiving the next.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::types::{Event, Handler, HandlerResponse};

/// Why [`run_event_loop`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The handler returned [`HandlerResponse::Stop`].
    Stopped,
    /// Every sender was dropped (transport shut down).
    Closed,
}

/// Receives events in order and hands each to `handler`. Handler errors are logged and the loop
/// keeps going; `Stop` closes the queue so pending and future events are never handled.
#[instrument(skip(events, handler))]
pub async fn run_event_loop(
    mut events: mpsc::Receiver<Event>,
    handler: Arc<dyn Handler>,
) -> LoopExit {
    info!("step: event loop started");

    while let Some(event) = events.recv().await {
        debug!(
            kind = event.kind(),
            chat_id = event.chat_id(),
            user_id = event.user_id(),
            "step: event received"
        );

        match handler.handle(&event).await {
            Ok(HandlerResponse::Stop) => {
                info!(chat_id = event.chat_id(), "step: handler requested stop, closing queue");
                events.close();
                return LoopExit::Stopped;
            }
            Ok(response) => {
                debug!(response = ?response, "step: event handled");
            }
            Err(e) => {
                error!(
                    error = %e,
                    kind = event.kind(),
                    chat_id = event.chat_id(),
                    "Handler failed"
                );
            }
        }
    }

    info!("step: event queue closed, event loop finished");
    LoopExit::Closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DbotError, Result};
    use crate::types::{Chat, Message, User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn text_event(chat_id: i64, content: &str) -> Event {
        Event::Message(Message {
            id: content.to_string(),
            user: User::anonymous(),
            chat: Chat {
                id: chat_id,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            message_type: "text".to_string(),
            created_at: chrono::Utc::now(),
        })
    }

    /// Records every message content; stops on "stop", fails on "fail".
    struct RecordingHandler {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Handler for RecordingHandler {
        async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
            let Event::Message(message) = event else {
                return Ok(HandlerResponse::Ignore);
            };
            self.seen.lock().unwrap().push(message.content.clone());
            match message.content.as_str() {
                "stop" => Ok(HandlerResponse::Stop),
                "fail" => Err(DbotError::Bot("boom".to_string())),
                _ => Ok(HandlerResponse::Continue),
            }
        }
    }

    /// **Test: events are handled in arrival order; a failing event does not end the loop; Stop does.**
    #[tokio::test]
    async fn test_event_loop_orders_and_stops() {
        let handler = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        let (tx, rx) = mpsc::channel(16);
        for content in ["a", "fail", "b", "stop", "after"] {
            tx.send(text_event(1, content)).await.unwrap();
        }

        let exit = run_event_loop(rx, handler.clone()).await;

        assert_eq!(exit, LoopExit::Stopped);
        assert_eq!(*handler.seen.lock().unwrap(), vec!["a", "fail", "b", "stop"]);
        assert!(tx.send(text_event(1, "late")).await.is_err());
    }

    /// **Test: dropping every sender ends the loop with Closed.**
    #[tokio::test]
    async fn test_event_loop_closed_when_senders_dropped() {
        let handler = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        let (tx, rx) = mpsc::channel(4);
        tx.send(text_event(7, "only")).await.unwrap();
        drop(tx);

        assert_eq!(run_event_loop(rx, handler.clone()).await, LoopExit::Closed);
        assert_eq!(*handler.seen.lock().unwrap(), vec!["only"]);
    }
}
