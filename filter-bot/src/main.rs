//! filter-bot binary. Config from env (.env supported) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use filter_bot::{init_db, run_bot, BotConfig, Cli, Commands, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::InitDb => init_db(DatabaseConfig::from_env()?).await,
    }
}
