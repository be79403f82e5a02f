//! Storage-level error type shared by all repository implementations.
//!
//! Storage errors never reach the client: services log them and answer with a
//! generic internal-error envelope (see [`crate::reply`]).

use thiserror::Error;

/// Failure reported by a backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The document store (PostgreSQL) rejected or failed the query.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The key-value store (Redis) failed the command.
    #[error("Key-value store error: {0}")]
    KeyValue(#[from] redis::RedisError),

    /// Any other backend failure, e.g. from a test double.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
