//! Pagination lifecycle observers.

/// Receives lifecycle notifications while a paginated sequence is drained.
///
/// `on_start` and `on_complete` fire at most once per drain; `on_update`
/// fires once per fetched page. Observers only ever see shared borrows of the
/// accumulated items.
pub trait PaginationObserver<T>: Send + Sync {
    /// Called once, before the first page is requested.
    fn on_start(&self) {}

    /// Called after each page with everything accumulated so far.
    fn on_update(&self, _accumulated: &[T]) {}

    /// Called once after the last page, only if every fetch succeeded.
    fn on_complete(&self, _result: &[T]) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> PaginationObserver<T> for NoopObserver {}

/// Observer that reports progress through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    label: String,
}

impl TracingObserver {
    /// Creates an observer whose events carry `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<T> PaginationObserver<T> for TracingObserver {
    fn on_start(&self) {
        tracing::debug!(label = %self.label, "pagination started");
    }

    fn on_update(&self, accumulated: &[T]) {
        tracing::debug!(label = %self.label, accumulated = accumulated.len(), "page received");
    }

    fn on_complete(&self, result: &[T]) {
        tracing::info!(label = %self.label, total = result.len(), "pagination complete");
    }
}
