//! Repository trait for count-record queries.

use crate::domain::entities::{RecordDto, RecordEntity};
use crate::error::StorageError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Validated query parameters for selecting and thresholding records.
///
/// Built once per request. Neither `start <= end` nor `min_count <= max_count`
/// is enforced; an inverted range simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub min_count: i64,
    pub max_count: i64,
}

impl FilterOptions {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, min_count: i64, max_count: i64) -> Self {
        Self {
            start,
            end,
            min_count,
            max_count,
        }
    }

    /// Returns true if the record falls inside both inclusive ranges.
    ///
    /// `start <= created_at <= end` AND `min_count <= sum(counts) <= max_count`.
    pub fn matches(&self, record: &RecordEntity) -> bool {
        let total = record.total_count();

        (self.start..=self.end).contains(&record.created_at)
            && (self.min_count..=self.max_count).contains(&total)
    }
}

/// Read access to the record store.
///
/// Implementations aggregate `counts` into `totalCount` and apply
/// [`FilterOptions::matches`] semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryRecordRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Returns every record matching the filter, possibly none.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be queried.
    async fn find(&self, options: &FilterOptions) -> Result<Vec<RecordDto>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn record_at(created_at: DateTime<Utc>, counts: Vec<i64>) -> RecordEntity {
        RecordEntity::new(1, "k", created_at, counts)
    }

    #[test]
    fn test_matches_inside_both_ranges() {
        let options = FilterOptions::new(day(2017, 1, 27), day(2017, 1, 29), 0, 1000);
        let record = record_at(Utc.with_ymd_and_hms(2017, 1, 28, 1, 22, 14).unwrap(), vec![310]);

        assert!(options.matches(&record));
    }

    #[test]
    fn test_matches_is_inclusive_on_all_bounds() {
        let options = FilterOptions::new(day(2017, 1, 27), day(2017, 1, 29), 100, 200);

        assert!(options.matches(&record_at(day(2017, 1, 27), vec![100])));
        assert!(options.matches(&record_at(day(2017, 1, 29), vec![150, 50])));
    }

    #[test]
    fn test_matches_rejects_outside_date_range() {
        let options = FilterOptions::new(day(2017, 1, 27), day(2017, 1, 29), 0, 1000);

        // End is start-of-day, so later on the end date is excluded.
        let late = Utc.with_ymd_and_hms(2017, 1, 29, 0, 0, 1).unwrap();
        assert!(!options.matches(&record_at(late, vec![10])));
        assert!(!options.matches(&record_at(day(2017, 1, 26), vec![10])));
    }

    #[test]
    fn test_matches_rejects_outside_count_range() {
        let options = FilterOptions::new(day(2016, 1, 1), day(2019, 1, 1), 2700, 3000);

        assert!(!options.matches(&record_at(day(2017, 1, 1), vec![2699])));
        assert!(!options.matches(&record_at(day(2017, 1, 1), vec![3000, 1])));
        assert!(options.matches(&record_at(day(2017, 1, 1), vec![2000, 863])));
    }

    #[test]
    fn test_inverted_ranges_match_nothing() {
        let options = FilterOptions::new(day(2019, 1, 1), day(2016, 1, 1), 1000, 0);
        assert!(!options.matches(&record_at(day(2017, 1, 1), vec![500])));
    }
}
