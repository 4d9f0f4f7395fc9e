//! Chatform responder.
//!
//! Application logic (the conversational session and its services), the
//! outbound ports, infrastructure adapters and the Dioxus desktop UI.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::PlayerConfig;
pub use ui::app;
