//! Infrastructure layer: concrete stores behind the domain repository traits.
//!
//! - [`cache`] - Key-value stores (Redis and in-process)
//! - [`persistence`] - Record stores (PostgreSQL and in-process)

pub mod cache;
pub mod persistence;
