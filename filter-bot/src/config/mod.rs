//! Bot configuration: DatabaseConfig (gateway) + BotConfig (Telegram, logging, timeouts).

mod bot_config;
mod database;


pub use bot_config::BotConfig;
pub use database::DatabaseConfig;
