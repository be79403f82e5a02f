//! PostgreSQL implementation of the record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RecordDto;
use crate::domain::repositories::{FilterOptions, RecordRepository};
use crate::error::StorageError;

/// Aggregated row produced by [`FIND_RECORDS_SQL`].
#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    key: String,
    created_at: DateTime<Utc>,
    total_count: i64,
}

/// Sums each record's `counts` first, then filters on both inclusive ranges.
///
/// `SUM` over `BIGINT` yields an exact `NUMERIC`; it is clamped to the
/// `BIGINT` range before the cast, matching `RecordEntity::total_count`.
const FIND_RECORDS_SQL: &str = r#"
    SELECT key, created_at, total_count
    FROM (
        SELECT r.id,
               r.key,
               r.created_at,
               GREATEST(
                   LEAST(
                       COALESCE((SELECT SUM(c) FROM unnest(r.counts) AS c), 0),
                       9223372036854775807
                   ),
                   -9223372036854775808
               )::BIGINT AS total_count
        FROM records r
        WHERE r.created_at >= $1 AND r.created_at <= $2
    ) aggregated
    WHERE total_count >= $3 AND total_count <= $4
    ORDER BY created_at, id
"#;

/// PostgreSQL repository for count records.
///
/// Aggregation runs inside the database so only matching rows cross the wire.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn find(&self, options: &FilterOptions) -> Result<Vec<RecordDto>, StorageError> {
        let rows = sqlx::query_as::<_, RecordRow>(FIND_RECORDS_SQL)
            .bind(options.start)
            .bind(options.end)
            .bind(options.min_count)
            .bind(options.max_count)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecordDto::new(row.key, row.created_at, row.total_count))
            .collect())
    }
}
