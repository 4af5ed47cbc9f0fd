//! Shared application state.

use std::sync::Arc;

use workflow_history_core::normalizer::EventNormalizer;
use workflow_history_core::transport::{CountTransport, HistoryTransport};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Paged history calls against the upstream API.
    pub transport: Arc<dyn HistoryTransport>,
    /// Count calls against the upstream API.
    pub counts: Arc<dyn CountTransport>,
    /// Raw-to-canonical event normalization.
    pub normalizer: Arc<dyn EventNormalizer>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HistoryTransport>,
        counts: Arc<dyn CountTransport>,
        normalizer: Arc<dyn EventNormalizer>,
    ) -> Self {
        Self {
            transport,
            counts,
            normalizer,
        }
    }
}
