//! Classified message repository: inserts into and reads from the two partition tables.
//!
//! Uses SqlitePoolManager; every value that may come from a user is bound, and table names only
//! come from [`Partition::table_name`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::models::{ClassifiedMessage, MessageQuery, Partition};
use crate::repository::ClassifiedMessageStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    /// Connects to `database_url`. Does not create tables; see [`Self::ensure_schema`].
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let pool_manager =
            SqlitePoolManager::connect(database_url, max_connections, acquire_timeout).await?;
        Ok(Self { pool_manager })
    }

    /// Creates both partition tables if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        info!("Creating partition tables if not exist");
        let pool = self.pool()?;

        for partition in Partition::ALL {
            let table = partition.table_name();
            sqlx::query(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    sender_id INTEGER NOT NULL,
                    message_text TEXT NOT NULL,
                    sent_date TIMESTAMP NOT NULL,
                    filter_word TEXT NOT NULL
                )
                "#
            ))
            .execute(pool)
            .await?;

            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_filter_word ON {table}(filter_word)"
            ))
            .execute(pool)
            .await?;
        }

        info!("Partition tables ready");
        Ok(())
    }

    fn pool(&self) -> Result<&sqlx::SqlitePool, StorageError> {
        if self.pool_manager.is_closed() {
            return Err(StorageError::Closed);
        }
        Ok(self.pool_manager.pool())
    }
}

#[async_trait]
impl ClassifiedMessageStore for MessageRepository {
    #[instrument(skip(self, message))]
    async fn store(
        &self,
        message: &ClassifiedMessage,
        partition: Partition,
    ) -> Result<(), StorageError> {
        let pool = self.pool()?;
        let sql = format!(
            "INSERT INTO {} (sender_id, message_text, sent_date, filter_word) VALUES (?, ?, ?, ?)",
            partition.table_name()
        );

        sqlx::query(&sql)
            .bind(message.sender_id)
            .bind(&message.message_text)
            .bind(message.sent_date)
            .bind(&message.filter_word)
            .execute(pool)
            .await?;

        info!(
            sender_id = message.sender_id,
            filter_word = %message.filter_word,
            "Stored classified message"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn query(&self, query: &MessageQuery) -> Result<Vec<ClassifiedMessage>, StorageError> {
        let pool = self.pool()?;
        let mut sql = format!(
            "SELECT sender_id, message_text, sent_date, filter_word FROM {}",
            query.partition.table_name()
        );
        if query.filter_word.is_some() {
            sql.push_str(" WHERE filter_word = ?");
        }
        sql.push_str(" ORDER BY sent_date ASC");
        if query.limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query_builder = sqlx::query_as::<_, ClassifiedMessage>(&sql);
        if let Some(word) = &query.filter_word {
            query_builder = query_builder.bind(word);
        }
        if let Some(limit) = query.limit {
            query_builder = query_builder.bind(limit);
        }

        let rows = query_builder.fetch_all(pool).await?;
        debug!(rows = rows.len(), "Query finished");
        Ok(rows)
    }

    async fn close(&self) {
        self.pool_manager.close().await;
    }
}
