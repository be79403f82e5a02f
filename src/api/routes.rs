//! API route configuration.

use crate::api::handlers::{in_memory_handler, records_handler};
use crate::state::AppState;
use axum::{Router, routing::any};

/// Resource routes.
///
/// Both routes accept every method; the handlers answer unsupported methods
/// with their own 405 envelope.
///
/// # Endpoints
///
/// - `POST /records`   - Filtered, aggregated record query
/// - `GET  /in-memory` - Key lookup
/// - `POST /in-memory` - Key write
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/records", any(records_handler))
        .route("/in-memory", any(in_memory_handler))
}
