//! Domain layer: entities and storage contracts.
//!
//! - [`entities`] - Records, their projections and key-value entries
//! - [`repositories`] - Storage traits implemented by [`crate::infrastructure`]
//!
//! This layer has no dependency on HTTP or on a concrete store.

pub mod entities;
pub mod repositories;
