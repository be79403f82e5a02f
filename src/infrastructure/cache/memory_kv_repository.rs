//! In-process key-value repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::KvEntry;
use crate::domain::repositories::KvRepository;
use crate::error::StorageError;

/// Key-value store held in a process-local map.
///
/// Used when Redis is not configured or unreachable at startup, and in tests.
/// Contents are lost on restart.
pub struct MemoryKvRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-process key-value store");
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryKvRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvRepository for MemoryKvRepository {
    async fn get(&self, key: &str) -> Result<KvEntry, StorageError> {
        let entries = self.entries.read().await;

        Ok(match entries.get(key) {
            Some(value) => KvEntry::found(key, value.as_str()),
            None => KvEntry::missing(key),
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_key_is_missing() {
        let store = MemoryKvRepository::new();
        let entry = store.get("active-tabs").await.unwrap();

        assert_eq!(entry, KvEntry::missing("active-tabs"));
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryKvRepository::new();

        store.set("active-tabs", "getir").await.unwrap();
        let entry = store.get("active-tabs").await.unwrap();

        assert_eq!(entry, KvEntry::found("active-tabs", "getir"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryKvRepository::new();

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().value, "second");
    }

    #[tokio::test]
    async fn test_empty_value_still_exists() {
        let store = MemoryKvRepository::new();

        store.set("k", "").await.unwrap();
        let entry = store.get("k").await.unwrap();

        assert!(entry.exists);
        assert!(entry.value.is_empty());
    }
}
