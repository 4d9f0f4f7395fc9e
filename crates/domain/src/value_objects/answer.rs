//! Answer values collected for form fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::ValidationError;

/// Format produced by date inputs and sent to the backend.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing a chosen date back to the visitor.
pub const DATE_DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// A 1-5 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RatingOutOfRange)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable rating, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value buffered or submitted for one field.
///
/// Serialized untagged so the response document stays a flat mapping of
/// field id to primitive: ratings as integers, dates as `YYYY-MM-DD`
/// strings, everything else as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(Rating),
    Date(NaiveDate),
    Text(String),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// Mirrors a falsy check: only an empty string counts as blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, AnswerValue::Text(text) if text.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<Rating> {
        match self {
            AnswerValue::Rating(rating) => Some(*rating),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            AnswerValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Value suitable for pre-filling an input control.
    pub fn input_value(&self) -> String {
        match self {
            AnswerValue::Rating(rating) => rating.to_string(),
            AnswerValue::Date(date) => date.format(DATE_INPUT_FORMAT).to_string(),
            AnswerValue::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Rating(rating) => write!(f, "{}", rating),
            AnswerValue::Date(date) => write!(f, "{}", date.format(DATE_DISPLAY_FORMAT)),
            AnswerValue::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(3).unwrap().value(), 3);
        assert_eq!(Rating::all().count(), 5);
    }

    #[test]
    fn rating_serializes_as_integer() {
        let value = AnswerValue::Rating(Rating::new(3).unwrap());
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(3));
    }

    #[test]
    fn date_serializes_as_iso_day() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        let value = AnswerValue::Date(date);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("2024-07-09"));
        assert_eq!(value.to_string(), "09-07-2024");
    }

    #[test]
    fn only_empty_text_is_blank() {
        assert!(AnswerValue::text("").is_blank());
        assert!(!AnswerValue::text(" ").is_blank());
        assert!(!AnswerValue::Rating(Rating::new(1).unwrap()).is_blank());
    }

    #[test]
    fn untagged_values_read_back_from_documents() {
        let rating: AnswerValue = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(rating.as_rating().map(Rating::value), Some(4));

        let text: AnswerValue = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(text.as_text(), Some("hello"));
    }
}
