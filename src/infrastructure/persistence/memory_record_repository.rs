//! In-process record repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{RecordDto, RecordEntity};
use crate::domain::repositories::{FilterOptions, RecordRepository};
use crate::error::StorageError;

/// Record store held in memory.
///
/// Applies [`FilterOptions::matches`] over its records in insertion order.
/// Used for local runs without PostgreSQL and as the store behind HTTP tests.
#[derive(Default)]
pub struct MemoryRecordRepository {
    records: RwLock<Vec<RecordEntity>>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `records`.
    pub fn with_records(records: Vec<RecordEntity>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn insert(&self, record: RecordEntity) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn find(&self, options: &FilterOptions) -> Result<Vec<RecordDto>, StorageError> {
        let records = self.records.read().await;

        Ok(records
            .iter()
            .filter(|record| options.matches(record))
            .map(RecordEntity::to_dto)
            .collect())
    }
}
