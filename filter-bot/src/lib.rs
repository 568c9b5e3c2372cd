//! # filter-bot
//!
//! Telegram bot that classifies sentences by whether they contain a per-chat filter word,
//! stores them in one of two tables, and lists stored sentences on request.
//!
//! ## Modules
//!
//! - [`conversation`] – session state, classification, reply texts, [`ConversationController`]
//! - [`config`] – env-based [`BotConfig`] and [`DatabaseConfig`]
//! - [`cli`] – clap parser for the binary
//! - [`runner`] – `run_bot` and `init_db`

pub mod cli;
pub mod config;
pub mod conversation;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, DatabaseConfig};
pub use conversation::{ConversationController, ConversationState, Mode, Timeouts};
pub use runner::{init_db, run_bot};
