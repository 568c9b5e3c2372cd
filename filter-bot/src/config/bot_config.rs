//! BotConfig: Telegram connection, logging, send timeout and the database section.
//! Use load() for env-based loading and validate() before init.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

use super::database::{parse_env_number, DatabaseConfig};
use crate::conversation::Timeouts;

pub const DEFAULT_LOG_FILE: &str = "logs/filter-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN and TELEGRAM_API_URL (or TELOXIDE_API_URL)
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// SEND_TIMEOUT_SECS
    pub send_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            log_file,
            send_timeout_secs: parse_env_number("SEND_TIMEOUT_SECS", 10)?,
            database: DatabaseConfig::from_env()?,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.send_timeout_secs == 0 {
            anyhow::bail!("SEND_TIMEOUT_SECS must be greater than 0");
        }
        self.database.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
    pub fn telegram(&self) -> &TelegramConfig {
        &self.telegram
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            database: self.database.timeout(),
            send: Duration::from_secs(self.send_timeout_secs),
        }
    }
}
