//! Response envelopes produced by the services.
//!
//! The two resources keep their own body shapes: `code`/`msg`/`records` for
//! records and `key`/`value`/`error` for the key-value store. Every
//! constructor returns a [`crate::reply::Reply`] so the HTTP status always
//! matches the body.

pub mod kv;
pub mod records;

pub use kv::{KEY_NOT_FOUND_MESSAGE, KvResponse};
pub use records::{RecordResponse, SUCCESS_MESSAGE};
