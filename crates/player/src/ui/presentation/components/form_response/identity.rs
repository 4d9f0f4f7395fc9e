//! Name and email inputs
//!
//! Only the input of the current step is editable; earlier inputs stay on
//! screen as read-only history.

use dioxus::prelude::*;

use chatform_domain::IdentityField;

use crate::presentation::components::common::SendButton;
use crate::presentation::services::use_conversation;
use crate::presentation::state::use_responder_state;

#[component]
pub fn IdentityInputs() -> Element {
    let state = use_responder_state();
    let email_visible = state
        .session
        .read()
        .as_ref()
        .is_some_and(|s| s.is_identity_visible(IdentityField::Email));

    rsx! {
        IdentityInput { field: IdentityField::Name }
        if email_visible {
            IdentityInput { field: IdentityField::Email }
        }
    }
}

#[component]
fn IdentityInput(field: IdentityField) -> Element {
    let state = use_responder_state();
    let conversation = use_conversation();

    let (value, editable) = {
        let session = state.session.read();
        match session.as_ref() {
            Some(s) => (
                s.identity().get(field).to_string(),
                s.editable_identity() == Some(field),
            ),
            None => (String::new(), false),
        }
    };

    let editor = conversation.clone();
    let mut session = state.session;

    rsx! {
        div {
            class: "input-container",
            input {
                r#type: match field {
                    IdentityField::Name => "text",
                    IdentityField::Email => "email",
                },
                name: field.document_key(),
                class: "input-box",
                placeholder: field.placeholder(),
                value: "{value}",
                disabled: !editable,
                oninput: move |evt: FormEvent| {
                    if let Some(session) = session.write().as_mut() {
                        let _ = editor.edit_identity(session, field, evt.value());
                    }
                },
            }
            if editable {
                SendButton {
                    disabled: false,
                    onclick: move |_| {
                        if let Some(session) = session.write().as_mut() {
                            let _ = conversation.submit_identity(session);
                        }
                    },
                }
            }
        }
    }
}
