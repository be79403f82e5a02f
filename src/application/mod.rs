//! Application layer services.
//!
//! Services receive validated parameters, call a repository trait and turn
//! the storage outcome into a response envelope.
//!
//! - [`services::record_service::RecordService`] - Filtered record queries
//! - [`services::kv_service::KvService`] - Key lookup and write
//! - [`responses`] - Envelopes returned by both services and by request
//!   validation

pub mod responses;
pub mod services;
