//! Record store implementations.
//!
//! - [`PgRecordRepository`] - PostgreSQL, aggregation done in SQL
//! - [`MemoryRecordRepository`] - In-process store applying the same filter

pub mod memory_record_repository;
pub mod pg_record_repository;

pub use memory_record_repository::MemoryRecordRepository;
pub use pg_record_repository::PgRecordRepository;
