//! HTTP boundary error type

use thiserror::Error;

/// Errors produced by an HTTP adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No answer within the configured request timeout
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
