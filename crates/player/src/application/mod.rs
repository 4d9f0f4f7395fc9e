//! Application layer - Use cases and orchestration

pub mod error;
pub mod notice;
pub mod services;
pub mod session;

// Re-export common types
pub use error::ServiceError;
pub use notice::{IntoNotice, Notice};
