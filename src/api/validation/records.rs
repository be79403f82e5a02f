//! Validation of `/records` requests.

use axum::http::Method;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::dto::records::{RecordResponse, RecordsRequest};
use crate::domain::repositories::FilterOptions;
use crate::reply::Reply;

/// Turns a `/records` request into [`FilterOptions`].
///
/// Only `POST` is served. The body must be a JSON object with `startDate`,
/// `endDate`, `minCount` and `maxCount`; the first missing field, in that
/// order, is named in the rejection. `null` counts as missing.
///
/// # Errors
///
/// - code 1 / 405 for any method other than `POST`
/// - code 2 / 400 for malformed JSON, an unparsable date or a missing field
pub fn validate_records_request(
    method: &Method,
    body: &[u8],
) -> Result<FilterOptions, Reply<RecordResponse>> {
    if method != Method::POST {
        debug!(%method, "Rejected /records request: method not allowed");
        return Err(RecordResponse::method_not_allowed());
    }

    let payload: RecordsRequest = serde_json::from_slice(body).map_err(|e| {
        warn!("Error on parsing the /records request body: {}", e);
        RecordResponse::bad_request(e.to_string())
    })?;

    debug!(?payload, "/records POST request received");

    let reject = |message: &str| {
        debug!("Rejected /records request: {}", message);
        RecordResponse::bad_request(message)
    };

    let Some(start_date) = payload.start_date else {
        return Err(reject("startDate field is missing."));
    };
    let Some(end_date) = payload.end_date else {
        return Err(reject("endDate field is missing."));
    };
    let Some(min_count) = payload.min_count else {
        return Err(reject("minCount field is missing."));
    };
    let Some(max_count) = payload.max_count else {
        return Err(reject("maxCount field is missing."));
    };

    Ok(FilterOptions::new(
        start_of_day(start_date),
        start_of_day(end_date),
        min_count,
        max_count,
    ))
}

fn start_of_day(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
