//! Response buffer
//!
//! Holds the current value of every field the visitor has touched, submitted
//! or not, and assembles the full response document for a submission.

use std::collections::BTreeMap;

use chatform_domain::{AnswerValue, FieldId, Identity};
use chatform_shared::ResponseDocument;

#[derive(Debug, Clone, Default)]
pub struct ResponseBuffer {
    answers: BTreeMap<FieldId, AnswerValue>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &FieldId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Replace (`Some`) or clear (`None`) the buffered value for a field.
    pub fn stage(&mut self, id: FieldId, value: Option<AnswerValue>) {
        match value {
            Some(value) => {
                self.answers.insert(id, value);
            }
            None => {
                self.answers.remove(&id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &AnswerValue)> {
        self.answers.iter()
    }

    pub fn document(
        &self,
        identity: &Identity,
        field_id: &FieldId,
        value: &AnswerValue,
    ) -> ResponseDocument {
        ResponseDocument::assemble(self.answers.iter(), identity, (field_id, value))
    }
}
