//! Form session: the state of one visitor walking through one form
//!
//! All mutation goes through the methods below. Submission is split in two
//! so no borrow of the session has to live across the network call:
//! [`FormSession::begin_submission`] validates and marks the field busy,
//! [`FormSession::complete_submission`] applies the backend's answer.

use std::fmt;

use uuid::Uuid;

use chatform_domain::{
    filter_input, validate_submission, AnswerValue, Field, FieldId, FieldKind, Form, Identity,
    IdentityField, Rating, Theme, UniqueUrl,
};
use chatform_shared::ResponseDocument;

use super::{AdvanceTicket, FieldSequencer, ResponseBuffer, SessionError, Step, StepController};
use crate::application::ServiceError;

/// Local identifier used to correlate log lines of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated answer on its way to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    unique_url: UniqueUrl,
    field_id: FieldId,
    value: AnswerValue,
    document: ResponseDocument,
}

impl PendingSubmission {
    pub fn unique_url(&self) -> &UniqueUrl {
        &self.unique_url
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn value(&self) -> &AnswerValue {
        &self.value
    }

    pub fn document(&self) -> &ResponseDocument {
        &self.document
    }
}

/// Result of handing a pending submission back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Stored: the field is locked and the sequence moved on.
    Accepted { field_id: FieldId, next_index: usize },
    /// Not stored: the field stays active and editable.
    Failed {
        field_id: FieldId,
        error: ServiceError,
    },
}

impl SubmissionOutcome {
    pub fn field_id(&self) -> &FieldId {
        match self {
            SubmissionOutcome::Accepted { field_id, .. } => field_id,
            SubmissionOutcome::Failed { field_id, .. } => field_id,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

/// Read-only view of one rendered field.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub index: usize,
    pub field: &'a Field,
    pub answer: Option<&'a AnswerValue>,
    pub active: bool,
    pub locked: bool,
    pub busy: bool,
}

#[derive(Debug)]
pub struct FormSession {
    id: SessionId,
    form: Form,
    identity: Identity,
    steps: StepController,
    sequencer: FieldSequencer,
    buffer: ResponseBuffer,
    in_flight: Option<FieldId>,
    closed: bool,
}

impl FormSession {
    pub fn new(form: Form) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, form = %form.id(), fields = form.len(), "Form session created");
        Self {
            id,
            sequencer: FieldSequencer::new(form.len()),
            form,
            identity: Identity::default(),
            steps: StepController::new(),
            buffer: ResponseBuffer::new(),
            in_flight: None,
            closed: false,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn theme(&self) -> Theme {
        self.form.theme()
    }

    pub fn step(&self) -> Step {
        self.steps.step()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn editable_identity(&self) -> Option<IdentityField> {
        self.steps.editable_identity()
    }

    pub fn is_identity_visible(&self, field: IdentityField) -> bool {
        self.steps.is_identity_visible(field)
    }

    pub fn active_index(&self) -> usize {
        self.sequencer.active_index()
    }

    pub fn active_field(&self) -> Option<&Field> {
        if !self.steps.fields_open() {
            return None;
        }
        self.form.field(self.sequencer.active_index())
    }

    /// Every field has been answered or shown.
    pub fn is_finished(&self) -> bool {
        self.steps.fields_open() && self.sequencer.is_finished()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn answer(&self, id: &FieldId) -> Option<&AnswerValue> {
        self.buffer.get(id)
    }

    pub fn is_locked(&self, id: &FieldId) -> bool {
        if self.sequencer.is_locked(id) {
            return true;
        }
        // Display-only fields lock as soon as they are on screen.
        match self.form.position_of(id) {
            Some(index) => {
                self.steps.fields_open()
                    && index <= self.sequencer.active_index()
                    && self.form.fields()[index].kind().is_display_only()
            }
            None => false,
        }
    }

    pub fn is_busy(&self, id: &FieldId) -> bool {
        self.in_flight.as_ref() == Some(id)
    }

    /// Fields on screen, in order: answered history plus the active field.
    pub fn visible_fields(&self) -> Vec<FieldView<'_>> {
        if !self.steps.fields_open() {
            return Vec::new();
        }
        let active = self.sequencer.active_index();
        self.form
            .fields()
            .iter()
            .take(self.sequencer.visible_count())
            .enumerate()
            .map(|(index, field)| FieldView {
                index,
                field,
                answer: self.buffer.get(field.id()),
                active: index == active,
                locked: self.is_locked(field.id()),
                busy: self.is_busy(field.id()),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn edit_identity(
        &mut self,
        field: IdentityField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.steps.editable_identity() != Some(field) {
            return Err(SessionError::IdentityReadOnly(field));
        }
        self.identity.set(field, value);
        Ok(())
    }

    pub fn submit_identity(&mut self) -> Result<Step, SessionError> {
        let step = self.steps.submit(&self.identity)?;
        tracing::debug!(session = %self.id, ?step, "Identity step advanced");
        Ok(step)
    }

    // -------------------------------------------------------------------------
    // Field input
    // -------------------------------------------------------------------------

    /// Resolve `id` to the active, unlocked field, or explain why not.
    fn writable_field(&self, id: &FieldId) -> Result<&Field, SessionError> {
        if !self.steps.fields_open() {
            return Err(SessionError::FieldsNotOpen);
        }
        let index = self
            .form
            .position_of(id)
            .ok_or_else(|| SessionError::UnknownField(id.clone()))?;
        if self.is_busy(id) {
            return Err(SessionError::SubmissionInFlight(id.clone()));
        }
        if self.is_locked(id) {
            return Err(SessionError::Locked(id.clone()));
        }
        if index != self.sequencer.active_index() {
            return Err(SessionError::NotActive(id.clone()));
        }
        Ok(&self.form.fields()[index])
    }

    /// Apply a raw edit from an editor. A rejected edit leaves the buffer as it was.
    pub fn edit_field(&mut self, id: &FieldId, raw: &str) -> Result<(), SessionError> {
        let field = self.writable_field(id)?;
        let kind = field.kind();
        if !kind.accepts_typed_input() {
            return Err(SessionError::NotEditable(id.clone()));
        }
        let value = filter_input(kind, raw)?;
        self.buffer.stage(id.clone(), value);
        Ok(())
    }

    pub fn select_rating(&mut self, id: &FieldId, rating: Rating) -> Result<(), SessionError> {
        let field = self.writable_field(id)?;
        if field.kind() != FieldKind::Rating {
            return Err(SessionError::NotEditable(id.clone()));
        }
        self.buffer
            .stage(id.clone(), Some(AnswerValue::Rating(rating)));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    pub fn begin_submission(&mut self, id: &FieldId) -> Result<PendingSubmission, SessionError> {
        if let Some(busy) = &self.in_flight {
            return Err(SessionError::SubmissionInFlight(busy.clone()));
        }
        let field = self.writable_field(id)?;
        let kind = field.kind();
        if kind.is_display_only() {
            return Err(SessionError::NotEditable(id.clone()));
        }

        let button_value = field.button_label().map(AnswerValue::text);
        let candidate = button_value.as_ref().or_else(|| self.buffer.get(id));
        let value = validate_submission(kind, candidate)?;

        let document = self.buffer.document(&self.identity, id, &value);
        self.in_flight = Some(id.clone());
        tracing::debug!(session = %self.id, field = %id, ?kind, "Submission started");

        Ok(PendingSubmission {
            unique_url: self.form.unique_url().clone(),
            field_id: id.clone(),
            value,
            document,
        })
    }

    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<(), ServiceError>,
    ) -> SubmissionOutcome {
        if self.in_flight.as_ref() == Some(&pending.field_id) {
            self.in_flight = None;
        }

        match result {
            Ok(()) => {
                // Keep the stored value so later documents re-send it.
                self.buffer
                    .stage(pending.field_id.clone(), Some(pending.value));
                self.sequencer.lock(pending.field_id.clone());
                let next_index = self.sequencer.advance();
                tracing::info!(session = %self.id, field = %pending.field_id, next_index, "Answer stored");
                SubmissionOutcome::Accepted {
                    field_id: pending.field_id,
                    next_index,
                }
            }
            Err(error) => {
                tracing::warn!(session = %self.id, field = %pending.field_id, %error, "Answer not stored");
                SubmissionOutcome::Failed {
                    field_id: pending.field_id,
                    error,
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Auto-advance
    // -------------------------------------------------------------------------

    /// A ticket when the active field is display-only and should move on by itself.
    pub fn auto_advance_ticket(&self) -> Option<AdvanceTicket> {
        if self.closed {
            return None;
        }
        self.active_field()
            .filter(|field| field.kind().is_display_only())
            .map(|_| self.sequencer.ticket())
    }

    /// Redeem a ticket from an elapsed timer. Stale tickets do nothing.
    pub fn fire_auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if self.closed || self.auto_advance_ticket() != Some(ticket) {
            tracing::debug!(session = %self.id, index = ticket.index(), "Ignoring stale auto-advance");
            return false;
        }
        let advanced = self.sequencer.redeem(ticket);
        if advanced {
            tracing::debug!(session = %self.id, index = self.sequencer.active_index(), "Auto-advanced");
        }
        advanced
    }

    /// Tear the session down; any timer still running becomes a no-op.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.sequencer.invalidate();
            tracing::debug!(session = %self.id, "Form session closed");
        }
    }
}
