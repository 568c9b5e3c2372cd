//! Data models for storage (partitions, classified messages, queries).

mod classified_message;
mod message_query;
mod partition;

pub use classified_message::ClassifiedMessage;
pub use message_query::MessageQuery;
pub use partition::Partition;
