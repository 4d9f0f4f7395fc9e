//! Chatform Shared - wire types between the form backend and the responder
//!
//! - Form definition DTOs and their conversion into domain types
//! - The flat response document sent on every submission
//!
//! No business logic lives here; only shapes and conversions.

pub mod dto;
pub mod response_document;

pub use dto::{heading_for, FieldDto, FormDto, FormEnvelope};
pub use response_document::ResponseDocument;
