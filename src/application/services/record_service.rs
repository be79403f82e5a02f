//! Count-record query service.

use std::sync::Arc;

use crate::application::responses::RecordResponse;
use crate::domain::repositories::{FilterOptions, RecordRepository};
use crate::reply::Reply;

/// Service answering filtered record queries.
///
/// Adds no business rules of its own: it forwards validated
/// [`FilterOptions`] to the repository and maps the outcome to a
/// [`RecordResponse`]. Storage errors are logged and replaced by a generic
/// internal-error envelope.
pub struct RecordService<R: RecordRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    /// Creates a new record service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches every record with `createdAt` in `[start, end]` and summed
    /// counts in `[min_count, max_count]`.
    ///
    /// An empty match is still a success with `records: []`.
    pub async fn fetch(&self, options: FilterOptions) -> Reply<RecordResponse> {
        match self.repository.find(&options).await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Records fetched");
                RecordResponse::success(records)
            }
            Err(e) => {
                tracing::error!("Error on fetching records with {:?}: {}", options, e);
                RecordResponse::internal()
            }
        }
    }
}
