//! Request validation for both resources.
//!
//! A validator turns an HTTP method plus raw body into a typed command, or
//! into the rejection reply that goes straight back to the client. No domain
//! logic runs on a rejected request.

pub mod in_memory;
pub mod records;

pub use in_memory::{KvCommand, validate_kv_request};
pub use records::validate_records_request;
