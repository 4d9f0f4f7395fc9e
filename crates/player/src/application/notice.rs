//! Outcome to notification mapping
//!
//! Operations return values; this module is the one place that decides what,
//! if anything, the visitor is told about them.

use chatform_domain::{Form, ValidationError};

use super::session::{SessionError, SubmissionOutcome};
use super::ServiceError;
use crate::ports::outbound::{NotificationKind, NotificationPort};

pub const WELCOME_MESSAGE: &str =
    "Welcome! One email per user allowed. Repeated entries update previous submissions.";
pub const FORM_UNAVAILABLE_MESSAGE: &str = "Form data is not available";
pub const FORM_FETCH_FAILED_MESSAGE: &str = "Error fetching form";
pub const SUBMITTED_MESSAGE: &str = "Response submitted successfully";
pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting response";

/// A notification ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn dispatch(&self, port: &dyn NotificationPort) {
        port.notify(self.kind, &self.message);
    }
}

/// Anything an operation can hand back that may warrant a notification.
pub trait IntoNotice {
    fn notice(&self) -> Option<Notice>;

    /// Send the notice, if there is one, through `port`.
    fn notify(&self, port: &dyn NotificationPort) {
        if let Some(notice) = self.notice() {
            notice.dispatch(port);
        }
    }
}

impl IntoNotice for ValidationError {
    fn notice(&self) -> Option<Notice> {
        Some(Notice::error(self.to_string()))
    }
}

impl IntoNotice for SessionError {
    fn notice(&self) -> Option<Notice> {
        match self {
            SessionError::Validation(err) => err.notice(),
            // The UI never offers these actions; nothing to tell the visitor.
            _ => None,
        }
    }
}

impl IntoNotice for SubmissionOutcome {
    fn notice(&self) -> Option<Notice> {
        Some(match self {
            SubmissionOutcome::Accepted { .. } => Notice::success(SUBMITTED_MESSAGE),
            SubmissionOutcome::Failed { .. } => Notice::error(SUBMIT_FAILED_MESSAGE),
        })
    }
}

impl IntoNotice for Result<Form, ServiceError> {
    fn notice(&self) -> Option<Notice> {
        Some(match self {
            Ok(_) => Notice::success(WELCOME_MESSAGE),
            Err(err) if err.is_not_found() => Notice::error(FORM_UNAVAILABLE_MESSAGE),
            Err(_) => Notice::error(FORM_FETCH_FAILED_MESSAGE),
        })
    }
}
