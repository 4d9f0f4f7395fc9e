//! State of the form response view

use dioxus::prelude::*;

use crate::application::session::{AdvanceTimer, FormSession};

/// Where the initial form fetch stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Fetch failed; `not_found` separates a missing form from a broken backend.
    Failed { not_found: bool },
}

#[derive(Clone, Copy)]
pub struct ResponderState {
    /// The session, once the form has loaded
    pub session: Signal<Option<FormSession>>,
    pub load: Signal<LoadState>,
    /// Bumped to trigger a re-fetch after a failure
    pub reload: Signal<u32>,
    /// Armed while a display-only field is active; dropping it cancels
    pub timer: Signal<Option<AdvanceTimer>>,
}

impl ResponderState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            load: Signal::new(LoadState::Loading),
            reload: Signal::new(0),
            timer: Signal::new(None),
        }
    }

    /// Close the current session and fetch the form again.
    pub fn retry(&mut self) {
        if let Some(session) = self.session.write().as_mut() {
            session.close();
        }
        self.timer.set(None);
        self.load.set(LoadState::Loading);
        *self.reload.write() += 1;
    }
}

impl Default for ResponderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the responder state from context
pub fn use_responder_state() -> ResponderState {
    use_context::<ResponderState>()
}
