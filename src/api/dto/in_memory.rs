//! DTOs for the `/in-memory` key-value endpoint.

use serde::Deserialize;
use url::form_urlencoded;

pub use crate::application::responses::kv::{KEY_NOT_FOUND_MESSAGE, KvResponse};

/// Query string of `GET /in-memory`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KvQuery {
    pub key: Option<String>,
}

impl KvQuery {
    /// Reads `key` from a raw query string.
    ///
    /// Never fails: undecodable pairs are skipped and only the first `key`
    /// counts when it is repeated.
    pub fn parse(raw: Option<&str>) -> Self {
        let key = raw.and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(name, _)| name == "key")
                .map(|(_, value)| value.into_owned())
        });

        Self { key }
    }
}

/// Body of `POST /in-memory`.
#[derive(Debug, Deserialize)]
pub struct KvRequest {
    pub key: Option<String>,
    pub value: Option<String>,
}
