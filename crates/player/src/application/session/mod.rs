//! Conversational session state machine
//!
//! - `step`: identity phases (name, email, fields)
//! - `sequencer`: active field index, locks, auto-advance tickets
//! - `buffer`: buffered answers and response documents
//! - `timer`: cancellable auto-advance timer handle
//! - `form_session`: the aggregate tying them together

mod buffer;
mod error;
mod form_session;
mod sequencer;
mod step;
mod timer;

pub use buffer::ResponseBuffer;
pub use error::SessionError;
pub use form_session::{
    FieldView, FormSession, PendingSubmission, SessionId, SubmissionOutcome,
};
pub use sequencer::{AdvanceTicket, FieldSequencer};
pub use step::{Step, StepController};
pub use timer::{AdvanceTimer, AUTO_ADVANCE_DELAY};
