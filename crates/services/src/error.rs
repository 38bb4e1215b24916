//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `SessionApi` adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("session api request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("session api returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no reply scripted for {0}")]
    NoReply(String),
    #[error("session api unavailable: {0}")]
    Unavailable(String),
}
