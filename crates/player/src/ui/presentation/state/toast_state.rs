//! Toast notifications
//!
//! `ToastState` is the UI's [`NotificationPort`]: application code notifies
//! through the port, the toast list renders whatever is queued here.

use std::time::Duration;

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::ports::outbound::{NotificationKind, NotificationPort};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    /// Visible toasts, oldest first
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;
        let id = *next_id.peek();
        next_id.set(id + 1);
        toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPort for ToastState {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let id = self.push(kind, message);
        let state = *self;
        spawn_task(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            state.dismiss(id);
        });
    }
}

/// Hook to access the toast state from context
pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}
