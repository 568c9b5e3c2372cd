//! The two storage partitions a classified message can land in.

use serde::{Deserialize, Serialize};

/// Closed set of partitions. Table names come only from here, never from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    /// Messages that contained the filter word.
    WithWord,
    /// Messages that did not contain the filter word.
    WithoutWord,
}

impl Partition {
    pub const ALL: [Partition; 2] = [Partition::WithWord, Partition::WithoutWord];

    /// Picks the partition for a classification outcome.
    pub fn for_match(contains_word: bool) -> Self {
        if contains_word {
            Partition::WithWord
        } else {
            Partition::WithoutWord
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            Partition::WithWord => "messages_with_word",
            Partition::WithoutWord => "messages_without_word",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}
