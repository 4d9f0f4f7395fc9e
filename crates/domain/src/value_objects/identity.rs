//! Visitor identity collected before any form field is shown

use serde::{Deserialize, Serialize};

/// Which identity input an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityField {
    Name,
    Email,
}

impl IdentityField {
    /// Key used for this value in the response document.
    pub fn document_key(self) -> &'static str {
        match self {
            IdentityField::Name => "name",
            IdentityField::Email => "email",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            IdentityField::Name => "Enter your name",
            IdentityField::Email => "Enter your email",
        }
    }
}

/// Name and email of the visitor. The email keys the stored response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn get(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::Name => &self.name,
            IdentityField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: IdentityField, value: impl Into<String>) {
        match field {
            IdentityField::Name => self.name = value.into(),
            IdentityField::Email => self.email = value.into(),
        }
    }

    pub fn is_filled(&self, field: IdentityField) -> bool {
        !self.get(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_by_field() {
        let mut identity = Identity::default();
        assert!(!identity.is_filled(IdentityField::Name));

        identity.set(IdentityField::Name, "Alice");
        identity.set(IdentityField::Email, "alice@x.com");

        assert_eq!(identity.get(IdentityField::Name), "Alice");
        assert_eq!(identity.email, "alice@x.com");
        assert_eq!(IdentityField::Email.document_key(), "email");
    }
}
