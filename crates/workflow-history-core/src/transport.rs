//! Remote API abstractions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::page::{HistoryPage, PageRequest};
use crate::route::Route;

/// Performs one paged history call against a resolved route.
#[async_trait]
pub trait HistoryTransport: Send + Sync {
    /// Fetch the page described by `request`.
    ///
    /// A missing `nextPageToken` in the response must be returned as the
    /// empty sentinel. No retries are expected from implementations.
    async fn fetch_history(
        &self,
        route: &Route,
        request: &PageRequest,
    ) -> Result<HistoryPage, HistoryError>;
}

/// Counts workflow executions matching a visibility query.
#[async_trait]
pub trait CountTransport: Send + Sync {
    /// Run the count query. `None` counts every execution in the namespace.
    async fn count_workflows(
        &self,
        route: &Route,
        query: Option<&str>,
    ) -> Result<CountWorkflowExecutionsResponse, HistoryError>;
}

/// Wire shape of `CountWorkflowExecutions` responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountWorkflowExecutionsResponse {
    /// Total number of matching executions.
    #[serde(default, deserialize_with = "crate::serde_util::int64")]
    pub count: i64,
    /// Per-group counts when the query has a `GROUP BY` clause.
    #[serde(default)]
    pub groups: Vec<CountGroup>,
}

/// One group of a grouped count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountGroup {
    /// Values of the `GROUP BY` columns for this group.
    #[serde(default)]
    pub group_values: Vec<serde_json::Value>,
    /// Number of executions in this group.
    #[serde(default, deserialize_with = "crate::serde_util::int64")]
    pub count: i64,
}
