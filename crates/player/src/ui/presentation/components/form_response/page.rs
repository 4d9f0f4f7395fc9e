//! Form response page
//!
//! Owns the view's session. Fetches the form on mount and again on every
//! retry, and keeps exactly one auto-advance timer armed while a
//! display-only field is active.

use std::sync::Arc;

use dioxus::prelude::*;

use chatform_domain::UniqueUrl;

use super::field_row::FieldRow;
use super::identity::IdentityInputs;
use crate::application::session::{AdvanceTimer, FormSession};
use crate::application::notice::{FORM_FETCH_FAILED_MESSAGE, FORM_UNAVAILABLE_MESSAGE};
use crate::infrastructure::spawn_task;
use crate::presentation::services::use_services;
use crate::presentation::state::{use_toast_state, LoadState, ResponderState};

#[component]
pub fn FormResponsePage(unique_url: UniqueUrl) -> Element {
    let services = use_services();
    let toasts = use_toast_state();
    let conversation = use_context_provider(|| services.conversation(Arc::new(toasts)));
    let mut state = use_context_provider(ResponderState::new);

    // Fetch on mount and whenever `reload` is bumped.
    let loader = conversation.clone();
    use_effect(move || {
        let attempt = *state.reload.read();
        let conversation = loader.clone();
        let unique_url = unique_url.clone();
        let mut state = state;
        spawn_task(async move {
            tracing::debug!(attempt, %unique_url, "Loading form");
            match conversation.open(&unique_url).await {
                Ok(session) => {
                    state.session.set(Some(session));
                    state.load.set(LoadState::Ready);
                }
                Err(err) => state.load.set(LoadState::Failed {
                    not_found: err.is_not_found(),
                }),
            }
        });
    });

    // Re-arm only when the ticket changes; replacing the handle cancels the old timer.
    let delay = conversation.auto_advance_delay();
    use_effect(move || {
        let ticket = state
            .session
            .read()
            .as_ref()
            .and_then(FormSession::auto_advance_ticket);
        let mut slot = state.timer;
        if slot.peek().as_ref().map(AdvanceTimer::ticket) == ticket {
            return;
        }
        let Some(ticket) = ticket else {
            slot.set(None);
            return;
        };

        let timer = AdvanceTimer::arm(ticket, delay);
        let elapsed = timer.elapsed();
        slot.set(Some(timer));
        let mut session = state.session;
        spawn_task(async move {
            if let Some(ticket) = elapsed.await {
                if let Some(session) = session.write().as_mut() {
                    session.fire_auto_advance(ticket);
                }
            }
        });
    });

    let load = *state.load.read();
    let (background, text, rows) = {
        let session = state.session.read();
        let theme = session.as_ref().map(FormSession::theme).unwrap_or_default();
        let rows: Vec<(usize, String)> = session
            .as_ref()
            .map(|s| {
                s.visible_fields()
                    .iter()
                    .map(|view| (view.index, view.field.id().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        (theme.background_color(), theme.text_color(), rows)
    };

    rsx! {
        div {
            class: "chat-container",
            style: "background-color: {background}; color: {text};",
            match load {
                LoadState::Loading => rsx! {
                    p { class: "loading", "Loading form..." }
                },
                LoadState::Failed { not_found } => rsx! {
                    div {
                        class: "load-failed",
                        p {
                            if not_found { "{FORM_UNAVAILABLE_MESSAGE}" } else { "{FORM_FETCH_FAILED_MESSAGE}" }
                        }
                        button {
                            class: "action-button",
                            onclick: move |_| state.retry(),
                            "Retry"
                        }
                    }
                },
                LoadState::Ready => rsx! {
                    div {
                        class: "center-wrapper",
                        div {
                            class: "form-content",
                            IdentityInputs {}
                            for (index, id) in rows {
                                FieldRow { key: "{id}", index }
                            }
                        }
                    }
                },
            }
        }
    }
}
