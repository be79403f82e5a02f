//! Key-value lookup and write service.

use std::sync::Arc;

use crate::application::responses::KvResponse;
use crate::domain::repositories::KvRepository;
use crate::reply::Reply;

/// Service over the key-value store.
///
/// A lookup ends in one of three states, decided only by what the store
/// returns:
///
/// - **Failed**: the store errored; generic internal error, 500
/// - **Missing**: no error, key absent; `"key specified does not exist."`, 200
/// - **Found**: `{key, value}`, 200
pub struct KvService<R: KvRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: KvRepository + ?Sized> KvService<R> {
    /// Creates a new key-value service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up `key`. An empty key is looked up like any other.
    pub async fn get(&self, key: &str) -> Reply<KvResponse> {
        match self.repository.get(key).await {
            Err(e) => {
                tracing::error!("Error while getting the value of {:?}: {}", key, e);
                KvResponse::internal(key)
            }
            Ok(entry) if !entry.exists => {
                tracing::debug!("Key {:?} does not exist", key);
                KvResponse::missing(key)
            }
            Ok(entry) => KvResponse::found(key, entry.value),
        }
    }

    /// Stores `value` under `key` and echoes both back.
    pub async fn set(&self, key: &str, value: &str) -> Reply<KvResponse> {
        match self.repository.set(key, value).await {
            Ok(()) => KvResponse::found(key, value),
            Err(e) => {
                tracing::error!("Error while setting the value of {:?}: {}", key, e);
                KvResponse::internal(key)
            }
        }
    }
}
