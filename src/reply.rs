//! Response envelopes shared by both resources.
//!
//! Every layer answers with a [`Reply`]: a body paired with the outcome class
//! that decides the HTTP status. The body shapes themselves differ per
//! resource (`code`/`msg`/`records` for records, `key`/`value`/`error` for the
//! key-value store) and are deliberately not unified.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any HTTP method a resource does not serve.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "the method is not allowed for this endpoint.";

/// Generic message returned when the backing store fails.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error occurred.";

/// Outcome class of a handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Success,
    MethodNotAllowed,
    BadRequest,
    Internal,
}

impl ReplyStatus {
    /// HTTP status sent for this outcome.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric `code` carried in the records envelope.
    pub fn envelope_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::MethodNotAllowed => 1,
            Self::BadRequest => 2,
            Self::Internal => 3,
        }
    }
}

/// A response body together with its outcome class.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: ReplyStatus,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn new(status: ReplyStatus, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status.status_code(), "Sending response");
        (self.status.status_code(), Json(self.body)).into_response()
    }
}
