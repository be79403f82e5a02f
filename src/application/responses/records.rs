//! Envelope of the `/records` resource.

use serde::Serialize;

use crate::domain::entities::RecordDto;
use crate::reply::{INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, Reply, ReplyStatus};

/// Message of a successful records query.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Response envelope for `/records`.
///
/// `records` serializes as `null` (not `[]`) on every non-success outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordResponse {
    pub code: i32,
    #[serde(rename = "msg")]
    pub message: String,
    pub records: Option<Vec<RecordDto>>,
}

impl RecordResponse {
    fn reply(status: ReplyStatus, message: impl Into<String>, records: Option<Vec<RecordDto>>) -> Reply<Self> {
        Reply::new(
            status,
            Self {
                code: status.envelope_code(),
                message: message.into(),
                records,
            },
        )
    }

    /// Code 0; `records` may be empty.
    pub fn success(records: Vec<RecordDto>) -> Reply<Self> {
        Self::reply(ReplyStatus::Success, SUCCESS_MESSAGE, Some(records))
    }

    /// Code 1.
    pub fn method_not_allowed() -> Reply<Self> {
        Self::reply(ReplyStatus::MethodNotAllowed, METHOD_NOT_ALLOWED_MESSAGE, None)
    }

    /// Code 2.
    pub fn bad_request(message: impl Into<String>) -> Reply<Self> {
        Self::reply(ReplyStatus::BadRequest, message, None)
    }

    /// Code 3. Never carries the underlying error.
    pub fn internal() -> Reply<Self> {
        Self::reply(ReplyStatus::Internal, INTERNAL_ERROR_MESSAGE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_success_envelope_serialization() {
        let created_at = Utc.timestamp_millis_opt(1_485_566_534_398).unwrap();
        let reply = RecordResponse::success(vec![RecordDto::new("TAKwGc6Jr4i8Z487", created_at, 310)]);

        assert_eq!(reply.status, ReplyStatus::Success);
        assert_eq!(
            serde_json::to_string(&reply.body).unwrap(),
            r#"{"code":0,"msg":"Success","records":[{"key":"TAKwGc6Jr4i8Z487","createdAt":"2017-01-28T01:22:14.398Z","totalCount":310}]}"#
        );
    }

    #[test]
    fn test_empty_success_serializes_empty_array() {
        let reply = RecordResponse::success(vec![]);
        assert_eq!(
            serde_json::to_string(&reply.body).unwrap(),
            r#"{"code":0,"msg":"Success","records":[]}"#
        );
    }

    #[test]
    fn test_error_envelopes_serialize_null_records() {
        assert_eq!(
            serde_json::to_string(&RecordResponse::method_not_allowed().body).unwrap(),
            r#"{"code":1,"msg":"the method is not allowed for this endpoint.","records":null}"#
        );
        assert_eq!(
            serde_json::to_string(&RecordResponse::bad_request("endDate field is missing.").body)
                .unwrap(),
            r#"{"code":2,"msg":"endDate field is missing.","records":null}"#
        );
        assert_eq!(
            serde_json::to_string(&RecordResponse::internal().body).unwrap(),
            r#"{"code":3,"msg":"internal server error occurred.","records":null}"#
        );
    }
}
