//! HTTP request handlers for API endpoints.
//!
//! Handlers receive the method and raw body, run the matching validator and
//! hand validated input to a service.

pub mod in_memory;
pub mod records;

pub use in_memory::in_memory_handler;
pub use records::records_handler;
