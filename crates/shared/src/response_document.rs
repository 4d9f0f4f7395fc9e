//! The response document sent to (and stored by) the backend
//!
//! A flat JSON object: `"email"`, `"name"`, and one key per answered field id.
//! Every submission sends the whole accumulated document, so any prefix of
//! submitted fields is a valid partial response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use chatform_domain::{AnswerValue, FieldId, Identity, IdentityField};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseDocument(Map<String, Value>);

impl ResponseDocument {
    /// Build a document from buffered answers, the visitor identity, and the
    /// answer being submitted now. Later writes win: identity overrides
    /// buffered keys and the submitted answer overrides everything.
    pub fn assemble<'a>(
        buffered: impl IntoIterator<Item = (&'a FieldId, &'a AnswerValue)>,
        identity: &Identity,
        submitted: (&FieldId, &AnswerValue),
    ) -> Self {
        let mut document = Self::default();
        for (id, value) in buffered {
            document.insert_answer(id, value);
        }
        document.insert(
            IdentityField::Email.document_key(),
            Value::String(identity.email.clone()),
        );
        document.insert(
            IdentityField::Name.document_key(),
            Value::String(identity.name.clone()),
        );
        document.insert_answer(submitted.0, submitted.1);
        document
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    fn insert_answer(&mut self, id: &FieldId, value: &AnswerValue) {
        // AnswerValue serializes to a primitive; Null only if that ever breaks.
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.0.insert(id.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn email(&self) -> Option<&str> {
        self.get(IdentityField::Email.document_key())
            .and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(IdentityField::Name.document_key())
            .and_then(Value::as_str)
    }

    /// Apply `newer` on top of this document, key by key.
    pub fn merge(&mut self, newer: &ResponseDocument) {
        for (key, value) in &newer.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for ResponseDocument {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatform_domain::Rating;
    use serde_json::json;

    fn identity() -> Identity {
        Identity {
            name: "Alice".into(),
            email: "alice@x.com".into(),
        }
    }

    #[test]
    fn assembles_a_flat_document() {
        let f1 = FieldId::new("1").unwrap();
        let answer = AnswerValue::text("alice@x.com");
        let doc = ResponseDocument::assemble(std::iter::empty(), &identity(), (&f1, &answer));

        assert_eq!(
            doc.into_value(),
            json!({ "email": "alice@x.com", "name": "Alice", "1": "alice@x.com" })
        );
    }

    #[test]
    fn includes_previous_answers_and_keeps_types() {
        let f1 = FieldId::new("f1").unwrap();
        let f2 = FieldId::new("f2").unwrap();
        let earlier = AnswerValue::Rating(Rating::new(3).unwrap());
        let now = AnswerValue::text("Great");

        let doc = ResponseDocument::assemble([(&f1, &earlier)], &identity(), (&f2, &now));

        assert_eq!(doc.get("f1"), Some(&json!(3)));
        assert_eq!(doc.get("f2"), Some(&json!("Great")));
        assert_eq!(doc.email(), Some("alice@x.com"));
        assert_eq!(doc.name(), Some("Alice"));
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn submitted_answer_overrides_buffered_value() {
        let f1 = FieldId::new("f1").unwrap();
        let stale = AnswerValue::text("old");
        let fresh = AnswerValue::text("new");

        let doc = ResponseDocument::assemble([(&f1, &stale)], &identity(), (&f1, &fresh));
        assert_eq!(doc.get("f1"), Some(&json!("new")));
    }

    #[test]
    fn merge_keeps_latest_values() {
        let mut stored: ResponseDocument =
            serde_json::from_value(json!({ "email": "a@b.com", "f1": "x", "f2": 2 })).unwrap();
        let newer: ResponseDocument =
            serde_json::from_value(json!({ "email": "a@b.com", "f1": "y" })).unwrap();

        stored.merge(&newer);

        assert_eq!(stored.get("f1"), Some(&json!("y")));
        assert_eq!(stored.get("f2"), Some(&json!(2)));
    }
}
