//! Test observer: records `PaginationObserver` notifications.

use std::sync::Mutex;

use workflow_history_core::observer::PaginationObserver;

/// One notification received by a `RecordingObserver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverCall {
    /// `on_start` fired.
    Start,
    /// `on_update` fired with this many accumulated items.
    Update(usize),
    /// `on_complete` fired with this many items.
    Complete(usize),
}

/// An observer that records every notification and keeps a copy of the
/// completed result.
#[derive(Debug)]
pub struct RecordingObserver<T> {
    calls: Mutex<Vec<ObserverCall>>,
    completed: Mutex<Option<Vec<T>>>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(None),
        }
    }
}

impl<T: Clone> RecordingObserver<T> {
    /// Create an observer with an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ObserverCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the items passed to `on_complete`, if it fired.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn completed(&self) -> Option<Vec<T>> {
        self.completed.lock().unwrap().clone()
    }
}

impl<T: Clone + Send + Sync> PaginationObserver<T> for RecordingObserver<T> {
    fn on_start(&self) {
        self.calls.lock().unwrap().push(ObserverCall::Start);
    }

    fn on_update(&self, accumulated: &[T]) {
        self.calls
            .lock()
            .unwrap()
            .push(ObserverCall::Update(accumulated.len()));
    }

    fn on_complete(&self, result: &[T]) {
        self.calls
            .lock()
            .unwrap()
            .push(ObserverCall::Complete(result.len()));
        *self.completed.lock().unwrap() = Some(result.to_vec());
    }
}
