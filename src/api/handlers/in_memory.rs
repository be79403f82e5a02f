//! Handler for the key-value endpoint.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
};

use crate::api::dto::in_memory::KvResponse;
use crate::api::validation::{KvCommand, validate_kv_request};
use crate::reply::Reply;
use crate::state::AppState;

/// Reads or writes a key in the key-value store.
///
/// # Endpoints
///
/// - `GET /in-memory?key=active-tabs`
/// - `POST /in-memory` with `{"key": "active-tabs", "value": "getir"}`
///
/// # Response
///
/// ```json
/// { "key": "active-tabs", "value": "getir" }
/// ```
///
/// `error` is added only when something went wrong. A missing key answers
/// 200 with `"error": "key specified does not exist."`. The query string is
/// read raw, so no query string can make the request fail before validation.
///
/// # Errors
///
/// - 400: malformed JSON or missing `key`/`value` on `POST`
/// - 405: method other than `GET`/`POST`
/// - 500: key-value store failure
pub async fn in_memory_handler(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Reply<KvResponse> {
    match validate_kv_request(&method, query.as_deref(), &body) {
        Ok(KvCommand::Get { key }) => state.kv_service.get(&key).await,
        Ok(KvCommand::Set { key, value }) => state.kv_service.set(&key, &value).await,
        Err(rejection) => rejection,
    }
}
