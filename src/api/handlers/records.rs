//! Handler for the records endpoint.

use axum::{body::Bytes, extract::State, http::Method};

use crate::api::dto::records::RecordResponse;
use crate::api::validation::validate_records_request;
use crate::reply::Reply;
use crate::state::AppState;

/// Queries count records by creation date and summed count.
///
/// # Endpoint
///
/// `POST /records` (every other method answers 405)
///
/// # Request Body
///
/// ```json
/// {
///   "startDate": "2016-01-26",
///   "endDate": "2018-02-02",
///   "minCount": 2700,
///   "maxCount": 3000
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": 0,
///   "msg": "Success",
///   "records": [
///     { "key": "TAKwGc6Jr4i8Z487", "createdAt": "2017-01-28T01:22:14.398Z", "totalCount": 2800 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400, code 2: malformed JSON, unparsable date, missing field
/// - 405, code 1: method other than `POST`
/// - 500, code 3: record store failure
pub async fn records_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Reply<RecordResponse> {
    match validate_records_request(&method, &body) {
        Ok(options) => state.record_service.fetch(options).await,
        Err(rejection) => rejection,
    }
}
