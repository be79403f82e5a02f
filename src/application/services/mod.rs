//! Business logic services for the application layer.

pub mod kv_service;
pub mod record_service;

pub use kv_service::KvService;
pub use record_service::RecordService;
