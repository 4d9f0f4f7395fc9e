//! Value objects for the form domain

mod answer;
mod identity;
mod media;
mod theme;

pub use answer::{AnswerValue, Rating, DATE_DISPLAY_FORMAT, DATE_INPUT_FORMAT};
pub use identity::{Identity, IdentityField};
pub use media::{BubbleContent, MediaKind, VIDEO_MIME_TYPE};
pub use theme::Theme;
