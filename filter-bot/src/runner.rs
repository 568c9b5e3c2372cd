//! Entry points behind the CLI: run the bot, initialize the schema.

use anyhow::{Context, Result};
use dbot_core::{init_tracing, LoopExit};
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use storage::{ClassifiedMessageStore, MessageRepository};
use tracing::{info, instrument};

use crate::config::{BotConfig, DatabaseConfig};
use crate::conversation::ConversationController;

/// Connects the gateway described by `config`. Failure here is fatal to startup.
pub async fn connect_store(config: &DatabaseConfig) -> Result<MessageRepository> {
    MessageRepository::connect(
        &config.database_url,
        config.max_connections,
        config.timeout(),
    )
    .await
    .with_context(|| format!("Failed to connect to database {}", config.database_url))
}

/// Main entry: validate config, init logging, connect the store, then dispatch until `/stop`
/// or Ctrl-C. The store is closed on every exit path after connecting.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        database_url = %config.database().database_url,
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let repo = connect_store(config.database()).await?;
    let store: Arc<dyn ClassifiedMessageStore> = Arc::new(repo);

    let result = dispatch(&config, store.clone()).await;
    store.close().await;

    let exit = result?;
    info!(exit = ?exit, "Bot stopped");
    Ok(())
}

async fn dispatch(config: &BotConfig, store: Arc<dyn ClassifiedMessageStore>) -> Result<LoopExit> {
    let bot = config.telegram().build_bot()?;
    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let controller = Arc::new(ConversationController::new(
        adapter,
        store,
        config.timeouts(),
    ));

    info!("Bot started successfully");
    run_dispatcher(bot, controller).await
}

/// Creates the two message tables. Logs to stdout only.
#[instrument(skip(config))]
pub async fn init_db(config: DatabaseConfig) -> Result<()> {
    config.validate()?;
    init_tracing(None)?;

    let repo = connect_store(&config).await?;
    let created = repo.ensure_schema().await.context("Failed to create tables");
    repo.close().await;
    created?;

    info!(database_url = %config.database_url, "Database initialized");
    Ok(())
}
