//! Form field entity and its kind

use serde::{Deserialize, Serialize};

use crate::ids::FieldId;
use crate::value_objects::BubbleContent;

/// How a field is rendered and validated.
///
/// Assigned once from the authoring heading when a form is loaded; nothing
/// downstream looks at heading strings again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Rating,
    Date,
    Number,
    Phone,
    Buttons,
    Text,
    /// Display-only content (text, image or video); advances on its own.
    Bubble,
}

impl FieldKind {
    /// Heading prefixes in match priority. The prefixes overlap ("Input" is a
    /// prefix of all the others) so the order here is load-bearing.
    pub const HEADING_PREFIXES: [(&'static str, FieldKind); 7] = [
        ("Input Email", FieldKind::Email),
        ("Input Rating", FieldKind::Rating),
        ("Input Date", FieldKind::Date),
        ("Input Number", FieldKind::Number),
        ("Input Phone", FieldKind::Phone),
        ("Input Buttons", FieldKind::Buttons),
        ("Input", FieldKind::Text),
    ];

    pub fn from_heading(heading: &str) -> Self {
        Self::HEADING_PREFIXES
            .iter()
            .find(|(prefix, _)| heading.starts_with(prefix))
            .map(|(_, kind)| *kind)
            .unwrap_or(FieldKind::Bubble)
    }

    /// Display-only fields need no answer and are locked as soon as shown.
    pub fn is_display_only(self) -> bool {
        matches!(self, FieldKind::Bubble)
    }

    /// Kinds whose value is typed into an editor.
    pub fn accepts_typed_input(self) -> bool {
        matches!(
            self,
            FieldKind::Email | FieldKind::Date | FieldKind::Number | FieldKind::Phone | FieldKind::Text
        )
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldKind::Email => Some("Enter your email"),
            FieldKind::Date => Some("Select a date"),
            FieldKind::Number => Some("Enter a number"),
            FieldKind::Phone => Some("Enter your phone"),
            FieldKind::Text => Some("Enter your text"),
            FieldKind::Rating | FieldKind::Buttons | FieldKind::Bubble => None,
        }
    }
}

/// One prompt in a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    /// Question text, button label, or bubble content/media URL.
    prompt: String,
}

impl Field {
    pub fn new(id: FieldId, kind: FieldKind, prompt: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            prompt: prompt.into(),
        }
    }

    pub fn from_heading(id: FieldId, heading: &str, prompt: impl Into<String>) -> Self {
        Self::new(id, FieldKind::from_heading(heading), prompt)
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The value a Buttons field submits: its own label.
    pub fn button_label(&self) -> Option<&str> {
        (self.kind == FieldKind::Buttons).then_some(self.prompt.as_str())
    }

    pub fn bubble_content(&self) -> Option<BubbleContent> {
        self.kind
            .is_display_only()
            .then(|| BubbleContent::classify(&self.prompt))
    }
}
