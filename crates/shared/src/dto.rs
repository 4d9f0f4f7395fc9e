//! Wire-format DTOs for the form API
//!
//! Field names follow the backend's JSON (`_id`, `uniqueUrl`, `heading`).
//! Conversion into domain types is where each field's kind gets assigned.

use serde::{Deserialize, Serialize};

use chatform_domain::{DomainError, Field, FieldId, FieldKind, Form, FormId, Theme, UniqueUrl};

/// One field as stored by the authoring tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDto {
    #[serde(rename = "_id")]
    pub id: String,
    /// Authoring label such as "Input Email" or "Text Bubble".
    pub heading: String,
    #[serde(default)]
    pub value: String,
}

/// A form definition as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub unique_url: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDto>,
}

/// Response body of the form lookup; `form` is null when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEnvelope {
    #[serde(default)]
    pub form: Option<FormDto>,
}

impl TryFrom<FieldDto> for Field {
    type Error = DomainError;

    fn try_from(dto: FieldDto) -> Result<Self, Self::Error> {
        Ok(Field::from_heading(FieldId::new(dto.id)?, &dto.heading, dto.value))
    }
}

impl TryFrom<FormDto> for Form {
    type Error = DomainError;

    fn try_from(dto: FormDto) -> Result<Self, Self::Error> {
        let fields = dto
            .fields
            .into_iter()
            .map(Field::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Form::new(
            FormId::new(dto.id)?,
            UniqueUrl::new(dto.unique_url)?,
            Theme::from_wire(dto.theme.as_deref().unwrap_or_default()),
            fields,
        )
    }
}

/// Canonical heading for each kind, used when serializing a domain form back
/// to the wire (fixtures, in-memory stores).
pub fn heading_for(kind: FieldKind) -> &'static str {
    FieldKind::HEADING_PREFIXES
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(prefix, _)| *prefix)
        .unwrap_or("Text Bubble")
}

impl From<&Field> for FieldDto {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id().to_string(),
            heading: heading_for(field.kind()).to_string(),
            value: field.prompt().to_string(),
        }
    }
}

impl From<&Form> for FormDto {
    fn from(form: &Form) -> Self {
        Self {
            id: form.id().to_string(),
            unique_url: form.unique_url().to_string(),
            theme: Some(form.theme().as_str().to_string()),
            fields: form.fields().iter().map(FieldDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "form": {
                "_id": "665f1",
                "uniqueUrl": "k3j9x",
                "theme": "blue",
                "fields": [
                    { "_id": "f1", "heading": "Text Bubble", "value": "Hello!" },
                    { "_id": "f2", "heading": "Input Email", "value": "Your email?" },
                    { "_id": "f3", "heading": "Input Rating", "value": "Rate us" },
                    { "_id": "f4", "heading": "Input Buttons", "value": "Finish" }
                ]
            }
        })
    }

    #[test]
    fn envelope_converts_into_domain_form() {
        let envelope: FormEnvelope = serde_json::from_value(sample()).unwrap();
        let form = Form::try_from(envelope.form.unwrap()).unwrap();

        assert_eq!(form.unique_url().as_str(), "k3j9x");
        assert_eq!(form.theme(), Theme::Blue);
        let kinds: Vec<_> = form.fields().iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::Bubble, FieldKind::Email, FieldKind::Rating, FieldKind::Buttons]
        );
    }

    #[test]
    fn null_form_deserializes_to_none() {
        let envelope: FormEnvelope = serde_json::from_value(json!({ "form": null })).unwrap();
        assert!(envelope.form.is_none());
        let envelope: FormEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.form.is_none());
    }

    #[test]
    fn missing_theme_and_fields_default() {
        let dto: FormDto =
            serde_json::from_value(json!({ "_id": "a", "uniqueUrl": "b" })).unwrap();
        let form = Form::try_from(dto).unwrap();
        assert_eq!(form.theme(), Theme::Default);
        assert!(form.is_empty());
    }

    #[test]
    fn blank_field_id_is_rejected() {
        let dto = FieldDto {
            id: String::new(),
            heading: "Input".into(),
            value: "Name?".into(),
        };
        assert!(Field::try_from(dto).is_err());
    }

    #[test]
    fn domain_form_survives_a_wire_trip() {
        let envelope: FormEnvelope = serde_json::from_value(sample()).unwrap();
        let form = Form::try_from(envelope.form.unwrap()).unwrap();
        let again = Form::try_from(FormDto::from(&form)).unwrap();
        assert_eq!(form, again);
    }
}
