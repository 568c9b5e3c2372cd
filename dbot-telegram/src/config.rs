//! Minimal transport config: token and optional Bot API URL.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN, which is otherwise required;
    /// TELEGRAM_API_URL (or TELOXIDE_API_URL) is optional.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| {
                anyhow::anyhow!("BOT_TOKEN not set (set it in .env or pass --token)")
            })?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Rejects an empty token or an API URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        self.api_url().map(|_| ())
    }

    fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|url| {
                reqwest::Url::parse(url).with_context(|| {
                    format!(
                        "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                        url
                    )
                })
            })
            .transpose()
    }

    /// Creates the teloxide Bot, pointed at `telegram_api_url` when set (e.g. a mock server).
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.api_url()? {
            Some(url) => Ok(bot.set_api_url(url)),
            None => Ok(bot),
        }
    }
}
