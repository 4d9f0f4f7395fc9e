//! Notification Port - fire-and-forget user notifications
//!
//! The UI implements this with toasts; headless runs log through tracing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationPort {
    fn notify(&self, kind: NotificationKind, message: &str);
}
