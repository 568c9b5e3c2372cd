//! Dispatcher runner: converts teloxide updates to core events and forwards them into one
//! ordered queue drained by [`dbot_core::run_event_loop`]. Stops the dispatcher when the handler
//! returns Stop.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::{run_event_loop, Event, Handler, LoopExit, ToCoreCallback, ToCoreMessage};
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::requests::{Requester, ResponseResult};
use teloxide::types::{CallbackQuery, Update};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Updates buffered between the dispatcher and the event loop.
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// Authorizes the bot (an invalid token fails here, before any update is served), then
/// dispatches until the handler stops the loop or Ctrl-C stops the dispatcher.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<LoopExit> {
    let me = bot
        .get_me()
        .await
        .context("Failed to authorize bot (check BOT_TOKEN)")?;
    info!(username = ?me.user.username, "Authorized on account");

    let (tx, rx) = mpsc::channel::<Event>(EVENT_QUEUE_CAPACITY);

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(forward_message))
        .branch(Update::filter_callback_query().endpoint(forward_callback));

    let mut dispatcher = Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![tx])
        .default_handler(|upd| async move {
            debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while forwarding update",
        ))
        .enable_ctrlc_handler()
        .build();

    let shutdown = dispatcher.shutdown_token();
    let consumer = tokio::spawn(async move {
        let exit = run_event_loop(rx, handler).await;
        if exit == LoopExit::Stopped {
            match shutdown.shutdown() {
                Ok(done) => done.await,
                Err(e) => warn!(error = %e, "Dispatcher already idle at shutdown"),
            }
        }
        exit
    });

    info!("Starting dispatcher with long polling");
    dispatcher.dispatch().await;
    // Dropping the dispatcher drops the last queue sender, so the event loop ends if it has not.
    drop(dispatcher);

    let exit = consumer.await.context("Event loop task panicked")?;
    info!(exit = ?exit, "Dispatcher stopped");
    Ok(exit)
}

async fn forward_message(msg: teloxide::types::Message, tx: mpsc::Sender<Event>) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        message_type = %core_msg.message_type,
        "Received message"
    );

    if tx.send(Event::Message(core_msg)).await.is_err() {
        warn!(chat_id = msg.chat.id.0, "Event loop stopped, dropping message");
    }
    Ok(())
}

async fn forward_callback(
    bot: teloxide::Bot,
    query: CallbackQuery,
    tx: mpsc::Sender<Event>,
) -> ResponseResult<()> {
    // Clears the button's loading state on the client.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    let callback = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = callback.user.id,
        chat_id = callback.chat.id,
        data = %callback.data,
        "Received callback"
    );

    if tx.send(Event::Callback(callback)).await.is_err() {
        warn!("Event loop stopped, dropping callback");
    }
    Ok(())
}
