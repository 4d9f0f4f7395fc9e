//! One visible field, rendered by kind
//!
//! Edits and submissions go through the conversation service; the row
//! itself only decides which control to show and whether it is enabled.

use dioxus::prelude::*;

use chatform_domain::{AnswerValue, Field, FieldId, FieldKind, Rating};

use super::bubble::Bubble;
use crate::application::services::ConversationService;
use crate::application::session::FormSession;
use crate::infrastructure::spawn_task;
use crate::presentation::components::common::SendButton;
use crate::presentation::services::use_conversation;
use crate::presentation::state::use_responder_state;

/// Snapshot of what a row needs, taken so no session borrow outlives rendering.
struct RowSnapshot {
    field: Field,
    answer: Option<AnswerValue>,
    /// Controls accept input
    enabled: bool,
    locked: bool,
}

fn snapshot(session: &FormSession, index: usize) -> Option<RowSnapshot> {
    session
        .visible_fields()
        .into_iter()
        .find(|view| view.index == index)
        .map(|view| RowSnapshot {
            field: view.field.clone(),
            answer: view.answer.cloned(),
            enabled: view.active && !view.locked && !view.busy,
            locked: view.locked,
        })
}

/// Validate, store and apply the answer for `id` without holding the
/// session across the request.
fn submit(conversation: &ConversationService, mut session: Signal<Option<FormSession>>, id: FieldId) {
    let pending = {
        let mut guard = session.write();
        let Some(current) = guard.as_mut() else {
            return;
        };
        match conversation.begin_submission(current, &id) {
            Ok(pending) => pending,
            Err(_) => return,
        }
    };

    let conversation = conversation.clone();
    spawn_task(async move {
        let result = conversation.store(&pending).await;
        if let Some(current) = session.write().as_mut() {
            conversation.finish_submission(current, pending, result);
        }
    });
}

#[component]
pub fn FieldRow(index: usize) -> Element {
    let state = use_responder_state();
    let conversation = use_conversation();

    let Some(row) = state
        .session
        .read()
        .as_ref()
        .and_then(|s| snapshot(s, index))
    else {
        return rsx! {};
    };

    let mut session = state.session;
    let id = row.field.id().clone();
    let kind = row.field.kind();
    let prompt = row.field.prompt().to_string();

    let on_send = {
        let conversation = conversation.clone();
        let id = id.clone();
        move |_: MouseEvent| submit(&conversation, session, id.clone())
    };

    let control = match kind {
        FieldKind::Bubble => match row.field.bubble_content() {
            Some(content) => rsx! { Bubble { content } },
            None => rsx! {},
        },

        FieldKind::Buttons => rsx! {
            div {
                class: "button-field-container",
                button {
                    class: if row.locked { "action-button clicked" } else { "action-button" },
                    disabled: !row.enabled,
                    onclick: on_send,
                    "{prompt}"
                }
            }
        },

        FieldKind::Rating => {
            let selected = row.answer.as_ref().and_then(AnswerValue::as_rating);
            rsx! {
                div {
                    class: "rating-send",
                    h3 { "{prompt}" }
                    div {
                        class: if row.locked { "rating-container disabled" } else { "rating-container" },
                        for rating in Rating::all() {
                            span {
                                key: "{rating}",
                                class: if selected == Some(rating) { "rating-box selected" } else { "rating-box" },
                                onclick: {
                                    let conversation = conversation.clone();
                                    let id = id.clone();
                                    let enabled = row.enabled;
                                    move |_| {
                                        if !enabled {
                                            return;
                                        }
                                        if let Some(current) = session.write().as_mut() {
                                            let _ = conversation.select_rating(current, &id, rating);
                                        }
                                    }
                                },
                                "{rating}"
                            }
                        }
                    }
                    SendButton { disabled: !row.enabled, onclick: on_send }
                }
            }
        }

        FieldKind::Email | FieldKind::Date | FieldKind::Number | FieldKind::Phone | FieldKind::Text => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Date => "date",
                _ => "text",
            };
            let value = row
                .answer
                .as_ref()
                .map(AnswerValue::input_value)
                .unwrap_or_default();
            // Dates are entered as YYYY-MM-DD and echoed as dd-mm-YYYY.
            let date_display = row
                .answer
                .as_ref()
                .filter(|answer| answer.as_date().is_some())
                .map(ToString::to_string);
            let editor = conversation.clone();
            let editor_id = id.clone();

            rsx! {
                div {
                    class: "input-row",
                    h3 { "{prompt}" }
                    div {
                        class: "input-container",
                        input {
                            r#type: input_type,
                            class: if row.locked { "input-box disabled" } else { "input-box" },
                            placeholder: kind.placeholder().unwrap_or_default(),
                            value: "{value}",
                            disabled: !row.enabled,
                            oninput: move |evt: FormEvent| {
                                if let Some(current) = session.write().as_mut() {
                                    let _ = editor.edit_field(current, &editor_id, &evt.value());
                                }
                            },
                        }
                        SendButton { disabled: !row.enabled, onclick: on_send }
                    }
                    if let Some(display) = date_display {
                        p { class: "date-display", "{display}" }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "field-container",
            {control}
        }
    }
}
