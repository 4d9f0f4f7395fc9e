//! Form aggregate: an ordered, immutable list of fields

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::Field;
use crate::error::DomainError;
use crate::ids::{FieldId, FormId, UniqueUrl};
use crate::value_objects::Theme;

/// A published form as seen by a visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    id: FormId,
    unique_url: UniqueUrl,
    theme: Theme,
    fields: Vec<Field>,
}

impl Form {
    /// Build a form, rejecting duplicate field ids (answers are keyed by id).
    pub fn new(
        id: FormId,
        unique_url: UniqueUrl,
        theme: Theme,
        fields: Vec<Field>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.id()) {
                return Err(DomainError::constraint(format!(
                    "duplicate field id '{}'",
                    field.id()
                )));
            }
        }
        Ok(Self {
            id,
            unique_url,
            theme,
            fields,
        })
    }

    pub fn id(&self) -> &FormId {
        &self.id
    }

    pub fn unique_url(&self) -> &UniqueUrl {
        &self.unique_url
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn position_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
