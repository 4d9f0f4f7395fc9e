//! Domain entities

mod field;
mod form;

pub use field::{Field, FieldKind};
pub use form::Form;
