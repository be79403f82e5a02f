//! Count-record entity and its response projection.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored count series.
///
/// Owned by the record store; the service only reads and aggregates it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntity {
    pub id: i64,
    pub key: String,
    pub created_at: DateTime<Utc>,
    pub counts: Vec<i64>,
}

impl RecordEntity {
    pub fn new(id: i64, key: impl Into<String>, created_at: DateTime<Utc>, counts: Vec<i64>) -> Self {
        Self {
            id,
            key: key.into(),
            created_at,
            counts,
        }
    }

    /// Sum of all count samples, clamped to the `i64` range.
    ///
    /// The exact sum is computed first, so only the final total saturates.
    pub fn total_count(&self) -> i64 {
        let sum: i128 = self.counts.iter().map(|&c| i128::from(c)).sum();
        i64::try_from(sum).unwrap_or(if sum > 0 { i64::MAX } else { i64::MIN })
    }

    /// Projects the entity into the shape returned to clients.
    pub fn to_dto(&self) -> RecordDto {
        RecordDto {
            key: self.key.clone(),
            created_at: self.created_at,
            total_count: self.total_count(),
        }
    }
}

/// Read-only projection of one aggregated record.
///
/// `createdAt` is serialized as RFC 3339 in UTC, e.g. `2017-01-28T01:22:14.398Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDto {
    pub key: String,
    pub created_at: DateTime<Utc>,
    pub total_count: i64,
}

impl RecordDto {
    pub fn new(key: impl Into<String>, created_at: DateTime<Utc>, total_count: i64) -> Self {
        Self {
            key: key.into(),
            created_at,
            total_count,
        }
    }
}
