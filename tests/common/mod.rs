#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use records_api::api::routes::resource_routes;
use records_api::domain::entities::{KvEntry, RecordDto, RecordEntity};
use records_api::domain::repositories::{FilterOptions, KvRepository, RecordRepository};
use records_api::error::StorageError;
use records_api::infrastructure::cache::MemoryKvRepository;
use records_api::infrastructure::persistence::MemoryRecordRepository;
use records_api::state::AppState;
use std::sync::Arc;

/// Record store whose every call fails.
pub struct FailingRecordRepository;

#[async_trait]
impl RecordRepository for FailingRecordRepository {
    async fn find(&self, _options: &FilterOptions) -> Result<Vec<RecordDto>, StorageError> {
        Err(StorageError::unavailable("connection refused"))
    }
}

/// Key-value store whose every call fails.
pub struct FailingKvRepository;

#[async_trait]
impl KvRepository for FailingKvRepository {
    async fn get(&self, _key: &str) -> Result<KvEntry, StorageError> {
        Err(StorageError::unavailable("connection refused"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::unavailable("connection refused"))
    }
}

pub fn sample_records() -> Vec<RecordEntity> {
    vec![
        RecordEntity::new(
            1,
            "TAKwGc6Jr4i8Z487",
            Utc.timestamp_millis_opt(1_485_566_534_398).unwrap(),
            vec![150, 160],
        ),
        RecordEntity::new(
            2,
            "LSyjwviN",
            Utc.timestamp_millis_opt(1_483_061_467_831).unwrap(),
            vec![100, 16],
        ),
        RecordEntity::new(
            3,
            "wIFZewQA",
            Utc.timestamp_millis_opt(1_458_343_975_236).unwrap(),
            vec![2000, 800, 63],
        ),
    ]
}

pub fn create_test_state(
    records: Arc<dyn RecordRepository>,
    kv: Arc<dyn KvRepository>,
) -> AppState {
    AppState::new(records, kv)
}

pub fn create_test_app(records: Arc<dyn RecordRepository>, kv: Arc<dyn KvRepository>) -> Router {
    resource_routes().with_state(create_test_state(records, kv))
}

/// Server over the sample records and an empty in-process key-value store.
pub fn create_test_server() -> TestServer {
    let app = create_test_app(
        Arc::new(MemoryRecordRepository::with_records(sample_records())),
        Arc::new(MemoryKvRepository::new()),
    );
    TestServer::new(app).unwrap()
}

/// Server whose stores fail on every call.
pub fn create_failing_server() -> TestServer {
    let app = create_test_app(Arc::new(FailingRecordRepository), Arc::new(FailingKvRepository));
    TestServer::new(app).unwrap()
}
