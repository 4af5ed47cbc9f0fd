//! Standard raw-to-canonical event normalization.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::trace;
use workflow_history_core::event::{EventCategory, HistoryEvent, RawEvent};
use workflow_history_core::normalizer::EventNormalizer;

const EVENT_TYPE_PREFIX: &str = "EVENT_TYPE_";
const LOCAL_ACTIVITY_MARKER: &str = "LocalActivity";

/// Default `EventNormalizer`.
///
/// Drops events without a type or without a positive numeric id; every other
/// event maps to exactly one `HistoryEvent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNormalizer;

#[async_trait]
impl EventNormalizer for StandardNormalizer {
    async fn normalize(&self, events: Vec<RawEvent>) -> Vec<HistoryEvent> {
        events.into_iter().filter_map(normalize_event).collect()
    }
}

fn normalize_event(mut raw: RawEvent) -> Option<HistoryEvent> {
    let id = match raw.event_id.parse::<i64>() {
        Ok(id) if id > 0 => id,
        _ => {
            trace!(event_id = %raw.event_id, "dropping event without a valid id");
            return None;
        }
    };
    let event_type = canonical_event_type(&raw.event_type)?;

    let attributes_key = raw
        .fields
        .iter()
        .find(|(key, value)| key.ends_with("EventAttributes") && value.is_object())
        .map(|(key, _)| key.clone());
    let attributes = attributes_key
        .and_then(|key| raw.fields.remove(&key))
        .unwrap_or(Value::Null);

    let task_id = raw.fields.remove("taskId").and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    let time_stamp = raw
        .event_time
        .as_deref()
        .and_then(|time| DateTime::parse_from_rfc3339(time).ok())
        .map(|time| time.with_timezone(&Utc));

    Some(HistoryEvent {
        id,
        category: categorize(&event_type, &attributes),
        event_type,
        time_stamp,
        task_id,
        attributes,
    })
}

/// Converts `EVENT_TYPE_ACTIVITY_TASK_SCHEDULED` into `ActivityTaskScheduled`.
/// Names that are already `PascalCase` are returned unchanged; an empty name
/// yields `None`.
fn canonical_event_type(event_type: &str) -> Option<String> {
    let name = event_type
        .strip_prefix(EVENT_TYPE_PREFIX)
        .unwrap_or(event_type);
    if name.is_empty() {
        return None;
    }
    if !name.contains('_') && name.chars().any(char::is_lowercase) {
        return Some(name.to_owned());
    }

    let pascal: String = name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect();
    (!pascal.is_empty()).then_some(pascal)
}

fn categorize(event_type: &str, attributes: &Value) -> EventCategory {
    if event_type == "MarkerRecorded" {
        let marker_name = attributes.get("markerName").and_then(Value::as_str);
        return if marker_name == Some(LOCAL_ACTIVITY_MARKER) {
            EventCategory::LocalActivity
        } else {
            EventCategory::Marker
        };
    }

    let starts = |prefix: &str| event_type.starts_with(prefix);

    if starts("ActivityTask") {
        EventCategory::Activity
    } else if starts("StartChildWorkflowExecution") || starts("ChildWorkflowExecution") {
        EventCategory::ChildWorkflow
    } else if starts("Timer") {
        EventCategory::Timer
    } else if event_type == "WorkflowExecutionSignaled"
        || event_type == "ExternalWorkflowExecutionSignaled"
        || starts("SignalExternalWorkflowExecution")
    {
        EventCategory::Signal
    } else if starts("WorkflowExecutionUpdate") {
        EventCategory::Update
    } else if starts("Nexus") {
        EventCategory::Nexus
    } else if starts("WorkflowTask") {
        EventCategory::Command
    } else if starts("WorkflowExecution")
        || starts("RequestCancelExternalWorkflowExecution")
        || starts("ExternalWorkflowExecutionCancelRequested")
        || starts("UpsertWorkflowSearchAttributes")
        || starts("WorkflowPropertiesModified")
    {
        EventCategory::Workflow
    } else {
        EventCategory::Other
    }
}
