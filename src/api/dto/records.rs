//! DTOs for the `/records` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

pub use crate::application::responses::records::{RecordResponse, SUCCESS_MESSAGE};

/// Calendar-date format accepted for `startDate` / `endDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record query payload.
///
/// Every field is optional at the JSON level so a missing field (or an
/// explicit `null`) can be reported by name after the body has parsed.
/// Dates are decoded while parsing, so a malformed date fails the parse
/// itself.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsRequest {
    #[serde(default, deserialize_with = "deserialize_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_date")]
    pub end_date: Option<NaiveDate>,

    pub min_count: Option<i64>,

    pub max_count: Option<i64>,
}

/// Parses a `YYYY-MM-DD` date.
///
/// The error text is sent to clients as-is.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| format!("parsing date {raw:?} as \"YYYY-MM-DD\": {e}"))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw).map_err(de::Error::custom))
        .transpose()
}
