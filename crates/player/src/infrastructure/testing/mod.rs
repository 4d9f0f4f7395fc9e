//! Test doubles for the outbound ports

pub mod fixtures;
mod in_memory_store;
mod recording_notifier;

pub use in_memory_store::InMemoryFormStore;
pub use recording_notifier::RecordingNotifier;
