use std::sync::Mutex;

use crate::ports::outbound::{NotificationKind, NotificationPort};

/// Keeps every notification so tests can assert on the exact sequence.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    /// Drain what has been recorded so far.
    pub fn take(&self) -> Vec<(NotificationKind, String)> {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *seen)
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((kind, message.to_string()));
    }
}
