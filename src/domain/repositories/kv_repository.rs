//! Repository trait for the key-value store.

use crate::domain::entities::KvEntry;
use crate::error::StorageError;
use async_trait::async_trait;

/// Read/write access to the key-value store.
///
/// A missing key is reported as [`KvEntry::missing`], never through the error
/// channel, so callers can tell a soft miss from a store failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisKvRepository`] - Redis-backed store
/// - [`crate::infrastructure::cache::MemoryKvRepository`] - In-process fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvRepository: Send + Sync {
    /// Looks up a key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only when the store itself fails.
    async fn get(&self, key: &str) -> Result<KvEntry, StorageError>;

    /// Stores `value` under `key`, replacing any previous value. No expiry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write fails.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
