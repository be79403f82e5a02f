//! Redis-backed key-value repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::KvEntry;
use crate::domain::repositories::KvRepository;
use crate::error::StorageError;

/// Key-value store on Redis.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Unlike a cache, failures are propagated so the service can report them.
pub struct RedisKvRepository {
    client: ConnectionManager,
}

impl RedisKvRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KeyValue`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KvRepository for RedisKvRepository {
    async fn get(&self, key: &str) -> Result<KvEntry, StorageError> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(key).await? {
            Some(value) => {
                debug!("Redis GET hit: {}", key);
                Ok(KvEntry::found(key, value))
            }
            None => {
                debug!("Redis GET miss: {}", key);
                Ok(KvEntry::missing(key))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value).await?;
        debug!("Redis SET: {}", key);

        Ok(())
    }
}
