//! Chatform domain: forms, fields, answers and the validation policy.
//!
//! Pure types and rules; no I/O, no async, no UI.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use entities::{Field, FieldKind, Form};
pub use error::DomainError;
pub use ids::{FieldId, FormId, UniqueUrl};
pub use validation::{
    filter_input, is_valid_email, is_valid_phone, validate_submission, ValidationError,
    PHONE_DIGITS,
};
pub use value_objects::{
    AnswerValue, BubbleContent, Identity, IdentityField, MediaKind, Rating, Theme,
    DATE_DISPLAY_FORMAT, DATE_INPUT_FORMAT, VIDEO_MIME_TYPE,
};
