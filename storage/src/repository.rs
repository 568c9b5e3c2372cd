//! Store trait for classified messages. [`crate::MessageRepository`] is the SQLite
//! implementation; callers hold it as `Arc<dyn ClassifiedMessageStore>` so tests can swap it.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{ClassifiedMessage, MessageQuery, Partition};

#[async_trait]
pub trait ClassifiedMessageStore: Send + Sync {
    /// Inserts one row into `partition`.
    async fn store(
        &self,
        message: &ClassifiedMessage,
        partition: Partition,
    ) -> Result<(), StorageError>;

    /// Reads rows matching `query`, oldest first.
    async fn query(&self, query: &MessageQuery) -> Result<Vec<ClassifiedMessage>, StorageError>;

    /// Releases the connection. Idempotent: only the first call does anything.
    async fn close(&self);
}
