//! Conversation Service - drives one visitor through one form
//!
//! Wraps [`FormSession`] with the backend calls and the notifications each
//! operation produces. Sync operations take the session by `&mut`; the
//! submission is offered both whole ([`ConversationService::submit_field`])
//! and in the three steps a UI needs so that no session borrow is held
//! while the request is out.

use std::sync::Arc;
use std::time::Duration;

use chatform_domain::{FieldId, IdentityField, Rating, UniqueUrl};

use super::FormService;
use crate::application::session::{
    AdvanceTimer, FormSession, PendingSubmission, SessionError, Step, SubmissionOutcome,
    AUTO_ADVANCE_DELAY,
};
use crate::application::{IntoNotice, ServiceError};
use crate::ports::outbound::NotificationPort;

#[derive(Clone)]
pub struct ConversationService {
    forms: FormService,
    notifier: Arc<dyn NotificationPort>,
    auto_advance_delay: Duration,
}

impl ConversationService {
    pub fn new(forms: FormService, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            forms,
            notifier,
            auto_advance_delay: AUTO_ADVANCE_DELAY,
        }
    }

    pub fn with_auto_advance_delay(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = delay;
        self
    }

    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }

    /// Fetch the form and start a session on it.
    pub async fn open(&self, unique_url: &UniqueUrl) -> Result<FormSession, ServiceError> {
        let loaded = self.forms.fetch_form_by_unique_url(unique_url).await;
        loaded.notify(self.notifier.as_ref());
        match loaded {
            Ok(form) => Ok(FormSession::new(form)),
            Err(err) => {
                tracing::error!(unique_url = %unique_url, error = %err, "Failed to load form");
                Err(err)
            }
        }
    }

    pub fn edit_identity(
        &self,
        session: &mut FormSession,
        field: IdentityField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        session.edit_identity(field, value)
    }

    pub fn submit_identity(&self, session: &mut FormSession) -> Result<Step, SessionError> {
        self.report(session.submit_identity())
    }

    pub fn edit_field(
        &self,
        session: &mut FormSession,
        id: &FieldId,
        raw: &str,
    ) -> Result<(), SessionError> {
        self.report(session.edit_field(id, raw))
    }

    pub fn select_rating(
        &self,
        session: &mut FormSession,
        id: &FieldId,
        rating: Rating,
    ) -> Result<(), SessionError> {
        self.report(session.select_rating(id, rating))
    }

    /// Validate the answer for `id` and mark it in flight.
    pub fn begin_submission(
        &self,
        session: &mut FormSession,
        id: &FieldId,
    ) -> Result<PendingSubmission, SessionError> {
        self.report(session.begin_submission(id))
    }

    /// Send the document of a pending submission to the backend.
    pub async fn store(&self, pending: &PendingSubmission) -> Result<(), ServiceError> {
        self.forms
            .save_form_response(pending.unique_url(), pending.document())
            .await
    }

    /// Apply the backend's answer and tell the visitor how it went.
    pub fn finish_submission(
        &self,
        session: &mut FormSession,
        pending: PendingSubmission,
        result: Result<(), ServiceError>,
    ) -> SubmissionOutcome {
        let outcome = session.complete_submission(pending, result);
        outcome.notify(self.notifier.as_ref());
        outcome
    }

    /// Validate, store and apply in one go.
    pub async fn submit_field(
        &self,
        session: &mut FormSession,
        id: &FieldId,
    ) -> Result<SubmissionOutcome, SessionError> {
        let pending = self.begin_submission(session, id)?;
        let result = self.store(&pending).await;
        Ok(self.finish_submission(session, pending, result))
    }

    /// Arm a timer when the active field is display-only.
    pub fn arm_auto_advance(&self, session: &FormSession) -> Option<AdvanceTimer> {
        session
            .auto_advance_ticket()
            .map(|ticket| AdvanceTimer::arm(ticket, self.auto_advance_delay))
    }

    /// Run every auto-advance due from the current position, one timer at a
    /// time, until a field needs the visitor or the form is done.
    pub async fn auto_advance(&self, session: &mut FormSession) -> usize {
        let mut advanced = 0;
        while let Some(timer) = self.arm_auto_advance(session) {
            let Some(ticket) = timer.elapsed().await else {
                break;
            };
            if !session.fire_auto_advance(ticket) {
                break;
            }
            advanced += 1;
        }
        advanced
    }

    fn report<T>(&self, result: Result<T, SessionError>) -> Result<T, SessionError> {
        if let Err(err) = &result {
            tracing::debug!(error = %err, "Session operation rejected");
            err.notify(self.notifier.as_ref());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notice::{
        FORM_FETCH_FAILED_MESSAGE, FORM_UNAVAILABLE_MESSAGE, SUBMITTED_MESSAGE,
        SUBMIT_FAILED_MESSAGE, WELCOME_MESSAGE,
    };
    use crate::infrastructure::testing::{fixtures, InMemoryFormStore, RecordingNotifier};
    use crate::ports::outbound::{ApiError, MockRawApiPort, NotificationKind};
    use chatform_domain::ValidationError;
    use serde_json::json;

    struct Harness {
        store: Arc<InMemoryFormStore>,
        notifier: Arc<RecordingNotifier>,
        service: ConversationService,
    }

    fn harness(store: InMemoryFormStore) -> Harness {
        let store = Arc::new(store);
        let notifier = Arc::new(RecordingNotifier::default());
        let service =
            ConversationService::new(FormService::new(store.clone()), notifier.clone());
        Harness {
            store,
            notifier,
            service,
        }
    }

    fn fid(id: &str) -> FieldId {
        FieldId::new(id).unwrap()
    }

    fn through_identity(service: &ConversationService, session: &mut FormSession, email: &str) {
        service
            .edit_identity(session, IdentityField::Name, "Alice")
            .unwrap();
        service.submit_identity(session).unwrap();
        service
            .edit_identity(session, IdentityField::Email, email)
            .unwrap();
        service.submit_identity(session).unwrap();
    }

    #[tokio::test]
    async fn open_greets_the_visitor() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::email_form()));
        let session = h.service.open(&fixtures::unique_url()).await.unwrap();

        assert_eq!(session.step(), Step::CollectingName);
        assert_eq!(
            h.notifier.take(),
            vec![(NotificationKind::Success, WELCOME_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn open_reports_a_missing_form() {
        let h = harness(InMemoryFormStore::new());
        let err = h.service.open(&fixtures::unique_url()).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            h.notifier.take(),
            vec![(NotificationKind::Error, FORM_UNAVAILABLE_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn open_reports_a_broken_backend() {
        let mut api = MockRawApiPort::new();
        api.expect_get_optional_json()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ConversationService::new(FormService::new(Arc::new(api)), notifier.clone());

        assert!(service.open(&fixtures::unique_url()).await.is_err());
        assert_eq!(
            notifier.take(),
            vec![(NotificationKind::Error, FORM_FETCH_FAILED_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn end_to_end_single_email_field() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::email_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&h.service, &mut session, "alice@x.com");
        h.notifier.take();

        h.service
            .edit_field(&mut session, &fid("1"), "alice@x.com")
            .unwrap();
        let outcome = h.service.submit_field(&mut session, &fid("1")).await.unwrap();

        assert!(outcome.is_accepted());
        assert!(session.is_finished());
        assert_eq!(
            h.store.responses(&fixtures::unique_url()),
            vec![json!({ "email": "alice@x.com", "name": "Alice", "1": "alice@x.com" })]
        );
        assert_eq!(
            h.notifier.take(),
            vec![(NotificationKind::Success, SUBMITTED_MESSAGE.to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn repeat_visit_with_same_email_updates_one_record() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::survey_form()));

        for answer in ["first", "second"] {
            let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
            through_identity(&h.service, &mut session, "same@x.com");
            h.service.auto_advance(&mut session).await;
            h.service.edit_field(&mut session, &fid("q"), answer).unwrap();
            h.service.submit_field(&mut session, &fid("q")).await.unwrap();
        }

        let stored = h.store.responses(&fixtures::unique_url());
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["q"], json!("second"));
    }

    #[tokio::test]
    async fn invalid_answer_notifies_and_stays_put() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::email_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&h.service, &mut session, "alice@x.com");
        h.notifier.take();

        h.service.edit_field(&mut session, &fid("1"), "a@b").unwrap();
        let err = h
            .service
            .submit_field(&mut session, &fid("1"))
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Validation(ValidationError::InvalidEmail));
        assert_eq!(session.active_index(), 0);
        assert!(h.store.responses(&fixtures::unique_url()).is_empty());
        assert_eq!(
            h.notifier.take(),
            vec![(NotificationKind::Error, "Only valid emails are allowed".to_string())]
        );
    }

    #[tokio::test]
    async fn missing_identity_is_reported() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::email_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        h.notifier.take();

        let err = h.service.submit_identity(&mut session).unwrap_err();

        assert_eq!(err, SessionError::Validation(ValidationError::MissingIdentity));
        assert_eq!(session.step(), Step::CollectingName);
        assert_eq!(
            h.notifier.take(),
            vec![(
                NotificationKind::Error,
                "Please fill in the required details".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn backend_failure_leaves_the_field_open() {
        let form = fixtures::email_form();
        let dto = chatform_shared::FormDto::from(&form);
        let mut api = MockRawApiPort::new();
        api.expect_get_optional_json()
            .returning(move |_| Ok(Some(json!({ "form": dto.clone() }))));
        api.expect_post_json().times(1).returning(|_, _| {
            Err(ApiError::HttpError {
                status: 500,
                message: "boom".into(),
            })
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ConversationService::new(FormService::new(Arc::new(api)), notifier.clone());

        let mut session = service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&service, &mut session, "alice@x.com");
        service.edit_field(&mut session, &fid("1"), "alice@x.com").unwrap();
        notifier.take();

        let outcome = service.submit_field(&mut session, &fid("1")).await.unwrap();

        assert!(!outcome.is_accepted());
        assert!(!session.is_locked(&fid("1")));
        assert!(!session.is_busy(&fid("1")));
        assert_eq!(
            notifier.take(),
            vec![(NotificationKind::Error, SUBMIT_FAILED_MESSAGE.to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn bubble_auto_advances_after_the_delay() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::survey_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&h.service, &mut session, "alice@x.com");

        let timer = h.service.arm_auto_advance(&session).unwrap();
        let fired = tokio::spawn(timer.elapsed());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!fired.is_finished());
        assert_eq!(session.active_index(), 0);

        tokio::time::sleep(Duration::from_millis(1)).await;
        let ticket = fired.await.unwrap().unwrap();
        assert!(session.fire_auto_advance(ticket));
        assert_eq!(session.active_index(), 1);
        assert!(h.service.arm_auto_advance(&session).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_timer_never_advances() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::survey_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&h.service, &mut session, "alice@x.com");

        let timer = h.service.arm_auto_advance(&session).unwrap();
        let fired = tokio::spawn(timer.elapsed());
        session.close();
        drop(timer);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.await.unwrap(), None);
        assert_eq!(session.active_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_walks_consecutive_bubbles() {
        let h = harness(InMemoryFormStore::new().with_form(fixtures::bubbles_only_form()));
        let mut session = h.service.open(&fixtures::unique_url()).await.unwrap();
        through_identity(&h.service, &mut session, "alice@x.com");

        let advanced = h
            .service
            .clone()
            .with_auto_advance_delay(Duration::from_millis(10))
            .auto_advance(&mut session)
            .await;

        assert_eq!(advanced, 2);
        assert!(session.is_finished());
        assert!(h.store.responses(&fixtures::unique_url()).is_empty());
    }
}
