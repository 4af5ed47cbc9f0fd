//! Event normalization contract.

use async_trait::async_trait;

use crate::event::{HistoryEvent, RawEvent};

/// Turns wire events into canonical history events.
///
/// Implementations are pure and total: they never fail, may drop events, and
/// may merge several raw events into one. Callers must not assume the output
/// has the same length as the input.
#[async_trait]
pub trait EventNormalizer: Send + Sync {
    /// Normalize a batch of raw events, preserving their relative order.
    async fn normalize(&self, events: Vec<RawEvent>) -> Vec<HistoryEvent>;
}
