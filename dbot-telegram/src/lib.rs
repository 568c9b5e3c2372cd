//! # dbot-telegram
//!
//! Telegram transport layer: adapters, [`dbot_core::Bot`] implementation, minimal config and the
//! dispatcher runner. Handles only Telegram connectivity and event forwarding; no persistence or
//! conversation logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{inline_keyboard, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{run_dispatcher, EVENT_QUEUE_CAPACITY};
