//! The conversational form view
//!
//! - `page`: fetch, auto-advance and the overall layout
//! - `identity`: name and email inputs
//! - `field_row`: one row per visible field, rendered by kind
//! - `bubble`: display-only content with the avatar

mod bubble;
mod field_row;
mod identity;
mod page;

pub use page::FormResponsePage;
