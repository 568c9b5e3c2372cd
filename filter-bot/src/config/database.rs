//! Database config. Loaded from env on its own so `init-db` works without a bot token.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://filter_bot.db";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// DATABASE_MAX_CONNECTIONS
    pub max_connections: u32,
    /// DB_TIMEOUT_SECS; bounds every gateway call and pool acquire.
    pub timeout_secs: u64,
}

/// Parses `name` as a number, `default` when unset.
pub(super) fn parse_env_number<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{} is not a valid number: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Ok(Self {
            database_url,
            max_connections: parse_env_number("DATABASE_MAX_CONNECTIONS", 5)?,
            timeout_secs: parse_env_number("DB_TIMEOUT_SECS", 10)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is set but empty");
        }
        if self.max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("DB_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
