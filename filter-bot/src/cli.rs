//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "filter-bot")]
#[command(about = "Telegram filter-word bot: run, init-db", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Create both message tables in DATABASE_URL if they do not exist.
    InitDb,
}
