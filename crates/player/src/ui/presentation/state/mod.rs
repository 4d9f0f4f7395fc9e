//! UI state held in Dioxus signals and provided through context

pub mod responder_state;
pub mod toast_state;

pub use responder_state::{use_responder_state, LoadState, ResponderState};
pub use toast_state::{use_toast_state, Toast, ToastState, TOAST_LIFETIME};
