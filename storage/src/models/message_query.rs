//! Query parameters for reading one partition.
//!
//! Used by MessageRepository::query.

use serde::{Deserialize, Serialize};

use super::partition::Partition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageQuery {
    pub partition: Partition,
    /// Exact `filter_word` match; bound as a parameter.
    pub filter_word: Option<String>,
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
}

impl MessageQuery {
    /// Every row of the partition.
    pub fn all(partition: Partition) -> Self {
        Self {
            partition,
            filter_word: None,
            limit: None,
        }
    }

    /// Rows of the partition stored under `filter_word`.
    pub fn with_filter_word(partition: Partition, filter_word: impl Into<String>) -> Self {
        Self {
            partition,
            filter_word: Some(filter_word.into()),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
