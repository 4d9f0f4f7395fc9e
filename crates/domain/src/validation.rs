//! Validation policy for field answers
//!
//! Two entry points:
//! - [`filter_input`] runs on every edit and decides whether the edit may
//!   reach the buffer at all.
//! - [`validate_submission`] runs when the visitor sends an answer: the
//!   required check first, then the format check for Email and Phone.
//!
//! The format rules are small enough to check by hand, which keeps the
//! domain free of a regex dependency.

use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::FieldKind;
use crate::value_objects::{AnswerValue, Rating, DATE_INPUT_FORMAT};

/// Number of digits a phone answer must have.
pub const PHONE_DIGITS: usize = 10;

/// Input rejected by the validation policy.
///
/// The display text of each variant is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the required details")]
    MissingIdentity,
    #[error("This field is required, please fill it")]
    Required,
    #[error("Only valid emails are allowed")]
    InvalidEmail,
    #[error("Please enter a valid phone number with 10 digits")]
    InvalidPhone,
    #[error("Only numbers are allowed")]
    NotANumber,
    #[error("Please select a valid date")]
    InvalidDate,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("This field cannot be edited")]
    NotEditable,
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with at least one character on each side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// `^\d{10}$`
pub fn is_valid_phone(candidate: &str) -> bool {
    candidate.len() == PHONE_DIGITS && is_digits(candidate)
}

fn is_digits(candidate: &str) -> bool {
    candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Check a raw edit against the live rules for `kind`.
///
/// `Ok(Some(value))` replaces the buffered value, `Ok(None)` clears it.
/// An error means the edit is dropped and the buffer keeps its old value.
pub fn filter_input(kind: FieldKind, raw: &str) -> Result<Option<AnswerValue>, ValidationError> {
    match kind {
        FieldKind::Number => {
            if is_digits(raw) {
                Ok(Some(AnswerValue::text(raw)))
            } else {
                Err(ValidationError::NotANumber)
            }
        }
        FieldKind::Phone => {
            if raw.len() <= PHONE_DIGITS && is_digits(raw) {
                Ok(Some(AnswerValue::text(raw)))
            } else {
                Err(ValidationError::InvalidPhone)
            }
        }
        FieldKind::Date => {
            if raw.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
                .map(|date| Some(AnswerValue::Date(date)))
                .map_err(|_| ValidationError::InvalidDate)
        }
        FieldKind::Rating => {
            let value: u8 = raw.trim().parse().map_err(|_| ValidationError::RatingOutOfRange)?;
            Rating::new(value).map(|rating| Some(AnswerValue::Rating(rating)))
        }
        FieldKind::Email | FieldKind::Text => Ok(Some(AnswerValue::text(raw))),
        FieldKind::Buttons | FieldKind::Bubble => Err(ValidationError::NotEditable),
    }
}

/// Decide whether `candidate` may be submitted as the answer for a `kind` field.
pub fn validate_submission(
    kind: FieldKind,
    candidate: Option<&AnswerValue>,
) -> Result<AnswerValue, ValidationError> {
    let value = match candidate {
        Some(value) if !value.is_blank() => value,
        _ => return Err(ValidationError::Required),
    };

    match kind {
        FieldKind::Email => match value.as_text() {
            Some(text) if is_valid_email(text) => Ok(value.clone()),
            _ => Err(ValidationError::InvalidEmail),
        },
        FieldKind::Phone => match value.as_text() {
            Some(text) if is_valid_phone(text) => Ok(value.clone()),
            _ => Err(ValidationError::InvalidPhone),
        },
        _ => Ok(value.clone()),
    }
}
