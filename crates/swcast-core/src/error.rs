//! Error types for fetching and validating API records.
//!
//! `FetchError` covers the HTTP GET + JSON decode step. `ShapeError` covers a
//! value that decoded fine but does not look like the record we asked for.

use thiserror::Error;

/// Failure of a single fetch-and-parse call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl could not complete the transfer (connect, DNS, timeout, bad URL...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The response body is not valid JSON.
    #[error("Failed to parse JSON")]
    Parse(#[source] serde_json::Error),
}

/// A decoded JSON value that does not match the expected record layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Why one entry of a movie's character list could not be printed.
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid character data: {0}")]
    Shape(#[from] ShapeError),
    #[error("character reference is not a URL string")]
    NotAUrl,
}
