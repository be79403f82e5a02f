//! Core domain entities.
//!
//! - [`RecordEntity`] - A stored count series
//! - [`RecordDto`] - Aggregated projection of a record returned to clients
//! - [`KvEntry`] - Outcome of a key-value lookup

pub mod kv_entry;
pub mod record;

pub use kv_entry::KvEntry;
pub use record::{RecordDto, RecordEntity};
