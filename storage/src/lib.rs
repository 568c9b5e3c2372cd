//! Storage crate: persistence gateway for classified messages.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Partition, ClassifiedMessage, MessageQuery
//! - [`repository`] – ClassifiedMessageStore trait
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;

pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{ClassifiedMessage, MessageQuery, Partition};
pub use repository::ClassifiedMessageStore;
pub use sqlite_pool::SqlitePoolManager;
