//! Forms used across unit tests.

use chatform_domain::{Field, FieldId, Form, FormId, Theme, UniqueUrl};

pub const UNIQUE_URL: &str = "k3j9x";

pub fn unique_url() -> UniqueUrl {
    UniqueUrl::new(UNIQUE_URL).unwrap_or_else(|_| unreachable!("fixture url is not blank"))
}

fn form(fields: &[(&str, &str, &str)]) -> Form {
    let fields = fields
        .iter()
        .filter_map(|(id, heading, value)| {
            FieldId::new(*id)
                .ok()
                .map(|id| Field::from_heading(id, heading, *value))
        })
        .collect();
    FormId::new("form-1")
        .and_then(|id| Form::new(id, unique_url(), Theme::Default, fields))
        .unwrap_or_else(|err| unreachable!("fixture form is valid: {err}"))
}

/// One email field with id "1".
pub fn email_form() -> Form {
    form(&[("1", "Input Email", "Your email?")])
}

/// A greeting bubble followed by one text question "q".
pub fn survey_form() -> Form {
    form(&[("hello", "Text Bubble", "Welcome!"), ("q", "Input", "Anything to add?")])
}

/// Two display-only fields and nothing to answer.
pub fn bubbles_only_form() -> Form {
    form(&[
        ("hello", "Text Bubble", "Hi"),
        ("pic", "Image Bubble", "https://cdn.example.com/cat.png"),
    ])
}
