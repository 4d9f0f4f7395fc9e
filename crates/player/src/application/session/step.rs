//! Identity step controller
//!
//! collecting-name -> collecting-email -> collecting-fields. The last step is
//! absorbing. Only the presence of a value is checked here: the email format
//! is enforced later, by Email fields, and not at this transition.

use serde::{Deserialize, Serialize};

use chatform_domain::{Identity, IdentityField, ValidationError};

use super::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    CollectingName,
    CollectingEmail,
    CollectingFields,
}

#[derive(Debug, Clone, Default)]
pub struct StepController {
    step: Step,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields_open(&self) -> bool {
        self.step == Step::CollectingFields
    }

    /// The identity input that is still editable, if any.
    pub fn editable_identity(&self) -> Option<IdentityField> {
        match self.step {
            Step::CollectingName => Some(IdentityField::Name),
            Step::CollectingEmail => Some(IdentityField::Email),
            Step::CollectingFields => None,
        }
    }

    /// Inputs of earlier steps stay on screen as read-only history.
    pub fn is_identity_visible(&self, field: IdentityField) -> bool {
        match field {
            IdentityField::Name => true,
            IdentityField::Email => self.step != Step::CollectingName,
        }
    }

    pub fn submit(&mut self, identity: &Identity) -> Result<Step, SessionError> {
        let current = self
            .editable_identity()
            .ok_or(SessionError::IdentityComplete)?;
        if !identity.is_filled(current) {
            return Err(ValidationError::MissingIdentity.into());
        }
        self.step = match self.step {
            Step::CollectingName => Step::CollectingEmail,
            Step::CollectingEmail | Step::CollectingFields => Step::CollectingFields,
        };
        Ok(self.step)
    }
}
