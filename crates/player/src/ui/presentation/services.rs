//! Service providers for the presentation layer
//!
//! The composition root hands a [`Services`] bundle to Dioxus as launch
//! context. Components reach application services through it and never
//! touch infrastructure adapter types.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use chatform_domain::UniqueUrl;

use crate::application::services::{ConversationService, FormService};
use crate::ports::outbound::{NotificationPort, RawApiPort};

/// Everything the UI needs from the outside, fixed for the app's lifetime
#[derive(Clone)]
pub struct Services {
    pub forms: FormService,
    /// The form this window responds to
    pub unique_url: UniqueUrl,
    pub auto_advance_delay: Duration,
}

impl Services {
    pub fn new(raw_api: Arc<dyn RawApiPort>, unique_url: UniqueUrl, auto_advance_delay: Duration) -> Self {
        Self {
            forms: FormService::new(raw_api),
            unique_url,
            auto_advance_delay,
        }
    }

    /// Conversation service notifying through `notifier`.
    ///
    /// Built per view because the UI notifier lives in signals, which only
    /// exist inside the Dioxus runtime.
    pub fn conversation(&self, notifier: Arc<dyn NotificationPort>) -> ConversationService {
        ConversationService::new(self.forms.clone(), notifier)
            .with_auto_advance_delay(self.auto_advance_delay)
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the view's conversation service from context
pub fn use_conversation() -> ConversationService {
    use_context::<ConversationService>()
}
