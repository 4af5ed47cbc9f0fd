//! Raw event fixtures.

use workflow_history_core::event::RawEvent;
use workflow_history_core::page::HistoryPage;

/// Build a raw event with the given id and wire event type.
#[must_use]
pub fn raw_event(event_id: u32, event_type: &str) -> RawEvent {
    let mut fields = serde_json::Map::new();
    fields.insert("taskId".to_owned(), serde_json::json!("1048576"));
    RawEvent {
        event_id: event_id.to_string(),
        event_time: Some("2026-01-15T10:00:00Z".to_owned()),
        event_type: event_type.to_owned(),
        fields,
    }
}

/// Build a raw event of a generic workflow type.
#[must_use]
pub fn workflow_event(event_id: u32) -> RawEvent {
    raw_event(event_id, "EVENT_TYPE_WORKFLOW_TASK_SCHEDULED")
}

/// Build a page holding `workflow_event`s for each id, followed by `next`.
#[must_use]
pub fn page_of(ids: &[u32], next: &str) -> HistoryPage {
    HistoryPage::new(ids.iter().copied().map(workflow_event).collect(), next)
}
