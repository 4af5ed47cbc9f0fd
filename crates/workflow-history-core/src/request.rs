//! Retrieval requests.

use crate::event::EventCategory;
use crate::route::RouteParameters;

/// Identifies the workflow execution whose history is being read.
///
/// Created per call and never mutated while the call is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRequest {
    /// Namespace that owns the workflow.
    pub namespace: String,
    /// Workflow identifier.
    pub workflow_id: String,
    /// Run identifier.
    pub run_id: String,
    /// Requested sort order, unvalidated. See `sort::endpoint_for_sort_order`.
    pub sort: Option<String>,
    /// Only return events of this category (page provider only).
    pub category: Option<EventCategory>,
    /// Compact views always read in ascending order (page provider only).
    pub compact: bool,
}

impl HistoryRequest {
    /// Request for the full history of one run, default sort order.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        workflow_id: impl Into<String>,
        run_id: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            workflow_id: workflow_id.into(),
            run_id: run_id.into(),
            ..Self::default()
        }
    }

    /// Sets the requested sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Marks the request as coming from a compact view.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Route parameters identifying this execution.
    #[must_use]
    pub fn route_parameters(&self) -> RouteParameters<'_> {
        RouteParameters {
            namespace: &self.namespace,
            workflow_id: Some(self.workflow_id.as_str()),
            run_id: Some(self.run_id.as_str()),
        }
    }
}
