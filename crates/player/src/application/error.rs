//! Service layer error types
//!
//! Errors that can occur when talking to the form backend, abstracted over
//! the HTTP adapter's own error type.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The backend has no form for this unique URL
    #[error("Form not found")]
    FormNotFound,

    /// Transport or HTTP failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered with data we could not use
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            ServiceError::FormNotFound => true,
            ServiceError::Api(err) => err.status() == Some(404),
            ServiceError::ParseError(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_missing_form_and_404() {
        assert!(ServiceError::FormNotFound.is_not_found());
        assert!(ServiceError::Api(ApiError::HttpError {
            status: 404,
            message: "no such form".into()
        })
        .is_not_found());
        assert!(!ServiceError::Api(ApiError::Timeout).is_not_found());
        assert!(!ServiceError::ParseError("bad".into()).is_not_found());
    }
}
