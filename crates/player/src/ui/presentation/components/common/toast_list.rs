//! Toast overlay
//!
//! Renders the queue in [`ToastState`]. Toasts expire on their own; a click
//! dismisses one early.

use dioxus::prelude::*;

use crate::ports::outbound::NotificationKind;
use crate::presentation::state::use_toast_state;

#[component]
pub fn ToastList() -> Element {
    let toasts = use_toast_state();
    let visible = toasts.toasts.read().clone();

    rsx! {
        div {
            class: "toast-list",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        NotificationKind::Success => "toast toast-success",
                        NotificationKind::Error => "toast toast-error",
                    },
                    onclick: move |_| toasts.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
