//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error for transport and gateway failures.

use std::time::Duration;

use thiserror::Error;

/// Top-level error (database, bot transport, timeout).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        operation: &'static str,
        elapsed: Duration,
    },
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
