//! Raw and normalized history events.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of one history event.
///
/// Only the envelope fields are typed; everything else (`taskId`, the
/// `*EventAttributes` object) is kept verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// Position of the event in the workflow history.
    #[serde(default, deserialize_with = "crate::serde_util::string_or_number")]
    pub event_id: String,
    /// RFC 3339 timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    /// Event type name, either `EVENT_TYPE_*` or `PascalCase`.
    #[serde(default)]
    pub event_type: String,
    /// All remaining fields of the event.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Category assigned to a history event during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    /// Activity scheduling and completion.
    Activity,
    /// Child workflow lifecycle.
    ChildWorkflow,
    /// Workflow task (command batch) events.
    Command,
    /// Markers recorded for local activities.
    LocalActivity,
    /// Other recorded markers.
    Marker,
    /// Nexus operation events.
    Nexus,
    /// Signals sent or received.
    Signal,
    /// Timer lifecycle.
    Timer,
    /// Workflow update events.
    Update,
    /// Workflow execution lifecycle.
    Workflow,
    /// Anything not classified above.
    Other,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 11] = [
        Self::Activity,
        Self::ChildWorkflow,
        Self::Command,
        Self::LocalActivity,
        Self::Marker,
        Self::Nexus,
        Self::Signal,
        Self::Timer,
        Self::Update,
        Self::Workflow,
        Self::Other,
    ];

    /// Returns the kebab-case name used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::ChildWorkflow => "child-workflow",
            Self::Command => "command",
            Self::LocalActivity => "local-activity",
            Self::Marker => "marker",
            Self::Nexus => "nexus",
            Self::Signal => "signal",
            Self::Timer => "timer",
            Self::Update => "update",
            Self::Workflow => "workflow",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Canonical history event produced by an `EventNormalizer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    /// Numeric position in the workflow history.
    pub id: i64,
    /// `PascalCase` event type name (e.g. `ActivityTaskScheduled`).
    pub event_type: String,
    /// Classification used for filtering.
    pub category: EventCategory,
    /// Parsed event timestamp, when present and well formed.
    pub time_stamp: Option<DateTime<Utc>>,
    /// Task identifier, when sent.
    pub task_id: Option<String>,
    /// The event's `*EventAttributes` payload, or `null`.
    pub attributes: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::{EventCategory, RawEvent};

    #[test]
    fn test_raw_event_keeps_unknown_fields() {
        let raw: RawEvent = serde_json::from_value(serde_json::json!({
            "eventId": "5",
            "eventTime": "2026-01-15T10:00:00Z",
            "eventType": "EVENT_TYPE_TIMER_STARTED",
            "taskId": "1048600",
            "timerStartedEventAttributes": { "timerId": "t-1" }
        }))
        .unwrap();

        assert_eq!(raw.event_id, "5");
        assert_eq!(raw.event_type, "EVENT_TYPE_TIMER_STARTED");
        assert_eq!(raw.fields["taskId"], "1048600");
        assert_eq!(raw.fields["timerStartedEventAttributes"]["timerId"], "t-1");
    }

    #[test]
    fn test_raw_event_accepts_numeric_event_id() {
        let raw: RawEvent =
            serde_json::from_value(serde_json::json!({ "eventId": 12, "eventType": "TimerFired" }))
                .unwrap();

        assert_eq!(raw.event_id, "12");
    }

    #[test]
    fn test_category_parses_kebab_case() {
        assert_eq!(
            "child-workflow".parse::<EventCategory>().unwrap(),
            EventCategory::ChildWorkflow
        );
        assert!("childWorkflow".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_category_display_matches_serde() {
        for category in EventCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::json!(category.to_string()));
        }
    }
}
