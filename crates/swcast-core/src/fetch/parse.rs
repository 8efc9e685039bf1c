//! Decode a response body into a JSON value.

use serde_json::Value;

use crate::error::FetchError;

pub(crate) fn parse_body(body: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(body).map_err(FetchError::Parse)
}
