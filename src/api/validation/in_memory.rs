//! Validation of `/in-memory` requests.

use axum::http::Method;
use tracing::{debug, warn};

use crate::api::dto::in_memory::{KvQuery, KvRequest, KvResponse};
use crate::reply::Reply;

/// A validated key-value operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvCommand {
    Get { key: String },
    Set { key: String, value: String },
}

/// Turns an `/in-memory` request into a [`KvCommand`].
///
/// - `GET` reads `key` from the raw query string. An absent key becomes
///   `""` and is passed through; a repeated key keeps its first value.
/// - `POST` requires `key` then `value` in the JSON body. The query string
///   is ignored.
///
/// # Errors
///
/// - 400 for malformed JSON or a missing body field
/// - 405 for any other method
pub fn validate_kv_request(
    method: &Method,
    query: Option<&str>,
    body: &[u8],
) -> Result<KvCommand, Reply<KvResponse>> {
    match *method {
        Method::GET => Ok(KvCommand::Get {
            key: KvQuery::parse(query).key.unwrap_or_default(),
        }),
        Method::POST => {
            let payload: KvRequest = serde_json::from_slice(body).map_err(|e| {
                warn!("Error on parsing the /in-memory request body: {}", e);
                KvResponse::bad_request(e.to_string())
            })?;

            let reject = |message: &str| {
                debug!("Rejected /in-memory request: {}", message);
                KvResponse::bad_request(message)
            };

            let Some(key) = payload.key else {
                return Err(reject("key field is missing"));
            };
            let Some(value) = payload.value else {
                return Err(reject("value field is missing"));
            };

            Ok(KvCommand::Set { key, value })
        }
        _ => {
            debug!(%method, "Rejected /in-memory request: method not allowed");
            Err(KvResponse::method_not_allowed())
        }
    }
}
