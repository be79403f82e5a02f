//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{KvService, RecordService};
use crate::domain::repositories::{KvRepository, RecordRepository};

/// Services shared by every request.
///
/// Services hold no per-request state, so one instance serves all requests
/// concurrently.
#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<RecordService<dyn RecordRepository>>,
    pub kv_service: Arc<KvService<dyn KvRepository>>,
}

impl AppState {
    /// Builds the services on top of the given stores.
    pub fn new(records: Arc<dyn RecordRepository>, kv: Arc<dyn KvRepository>) -> Self {
        Self {
            record_service: Arc::new(RecordService::new(records)),
            kv_service: Arc::new(KvService::new(kv)),
        }
    }
}
