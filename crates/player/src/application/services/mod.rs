//! Application services
//!
//! Use cases for the form responder. Services depend on port traits, not
//! concrete infrastructure implementations.

pub mod conversation_service;
pub mod form_service;

pub use conversation_service::ConversationService;
pub use form_service::{form_path, responses_path, FormService};
