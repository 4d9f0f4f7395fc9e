use thiserror::Error;

use chatform_domain::{FieldId, IdentityField, ValidationError};

/// Why a session operation was refused.
///
/// Only [`SessionError::Validation`] is meant for the visitor; every other
/// variant describes a request the UI should not have been able to make.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("identity is already complete")]
    IdentityComplete,

    #[error("the {} input is read-only in this step", .0.document_key())]
    IdentityReadOnly(IdentityField),

    #[error("form fields are not open yet")]
    FieldsNotOpen,

    #[error("unknown field '{0}'")]
    UnknownField(FieldId),

    #[error("field '{0}' is not the active field")]
    NotActive(FieldId),

    #[error("field '{0}' is locked")]
    Locked(FieldId),

    #[error("field '{0}' takes no input")]
    NotEditable(FieldId),

    #[error("a submission for field '{0}' is already in flight")]
    SubmissionInFlight(FieldId),
}
