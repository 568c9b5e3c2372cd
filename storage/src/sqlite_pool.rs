//! SQLite connection pool wrapper for the storage crate.
//!
//! Provides [`SqlitePoolManager`] to open one pool per database URL and release it exactly once.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Manages a single SQLite pool; creates the database file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
    /// Shared across clones so the pool is closed once no matter which clone closes it.
    closed: Arc<AtomicBool>,
}

impl SqlitePoolManager {
    /// Opens a pool for `database_url` (`sqlite://path.db`, `sqlite:path.db` or a bare path) and
    /// pings it, so an unreachable database fails here rather than on the first query.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        info!(database_url = %database_url, max_connections, "Initializing SQLite pool");

        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?
        } else {
            SqliteConnectOptions::new().filename(database_url)
        }
        .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self {
            pool,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Closes the pool. Returns `true` only for the call that actually closed it.
    pub async fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.pool.close().await;
        info!("SQLite pool closed");
        true
    }
}
