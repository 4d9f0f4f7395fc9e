//! Tracing-backed notifications for runs without a visible surface

use crate::ports::outbound::{NotificationKind, NotificationPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!(target: "chatform::notice", "{message}"),
            NotificationKind::Error => tracing::warn!(target: "chatform::notice", "{message}"),
        }
    }
}
