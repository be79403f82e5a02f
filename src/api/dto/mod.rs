//! Data Transfer Objects for API requests and responses.
//!
//! Request payloads keep every field optional so a missing field can be
//! reported by name. Response envelopes live in
//! [`crate::application::responses`] and are re-exported here.

pub mod in_memory;
pub mod records;
