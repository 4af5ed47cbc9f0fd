//! Shared test fakes and fixtures for workflow history retrieval.

mod fixtures;
mod observer;
mod transport;

pub use fixtures::{page_of, raw_event, workflow_event};
pub use observer::{ObserverCall, RecordingObserver};
pub use transport::{FailingTransport, FixedCountTransport, ScriptedTransport};
