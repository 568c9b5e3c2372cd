//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], inbound [`Event`]s, errors,
//! tracing initialization and the sequential [`run_event_loop`]. Transport-agnostic; used by
//! dbot-telegram and filter-bot.

pub mod bot;
pub mod error;
pub mod event_loop;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, Result};
pub use event_loop::{run_event_loop, LoopExit};
pub use logger::init_tracing;
pub use types::{
    Callback, Chat, Choice, Event, Handler, HandlerResponse, Message, ToCoreCallback,
    ToCoreMessage, ToCoreUser, User,
};
