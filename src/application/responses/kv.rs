//! Envelope of the `/in-memory` resource.

use serde::Serialize;

use crate::reply::{INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, Reply, ReplyStatus};

/// Message returned when a looked-up key is absent.
pub const KEY_NOT_FOUND_MESSAGE: &str = "key specified does not exist.";

/// Response envelope for `/in-memory`.
///
/// `error` is left out of the JSON entirely when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KvResponse {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl KvResponse {
    /// A key holding `value`; used for both a found lookup and a completed write.
    pub fn found(key: impl Into<String>, value: impl Into<String>) -> Reply<Self> {
        Reply::new(
            ReplyStatus::Success,
            Self {
                key: key.into(),
                value: value.into(),
                error: String::new(),
            },
        )
    }

    /// Soft miss. Answered with a success status.
    pub fn missing(key: impl Into<String>) -> Reply<Self> {
        Reply::new(
            ReplyStatus::Success,
            Self {
                key: key.into(),
                value: String::new(),
                error: KEY_NOT_FOUND_MESSAGE.to_string(),
            },
        )
    }

    /// Store failure. The key is echoed, the value is left empty.
    pub fn internal(key: impl Into<String>) -> Reply<Self> {
        Reply::new(
            ReplyStatus::Internal,
            Self {
                key: key.into(),
                value: String::new(),
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            },
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Reply<Self> {
        Reply::new(
            ReplyStatus::BadRequest,
            Self {
                error: message.into(),
                ..Self::default()
            },
        )
    }

    pub fn method_not_allowed() -> Reply<Self> {
        Reply::new(
            ReplyStatus::MethodNotAllowed,
            Self {
                error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
                ..Self::default()
            },
        )
    }
}
