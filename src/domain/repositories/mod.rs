//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage seam: services depend on them, the
//! infrastructure layer implements them, and unit tests replace them with
//! `mockall` mocks.
//!
//! - [`RecordRepository`] - Filtered, aggregated record queries
//! - [`KvRepository`] - Key lookup and write

pub mod kv_repository;
pub mod record_repository;

pub use kv_repository::KvRepository;
pub use record_repository::{FilterOptions, RecordRepository};

#[cfg(test)]
pub use kv_repository::MockKvRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
