//! Workflow execution counts.

use serde::Serialize;
use tracing::warn;
use workflow_history_core::error::HistoryError;
use workflow_history_core::route::{ApiRoute, RouteParameters, route_for_api};
use workflow_history_core::transport::{CountTransport, CountWorkflowExecutionsResponse};

const GROUP_BY_EXECUTION_STATUS: &str = "GROUP BY ExecutionStatus";

/// Number of executions matching a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowCount {
    /// Matching executions; zero when the count could not be retrieved.
    pub count: i64,
}

/// Counts executions in `namespace` matching `query`.
///
/// Best effort: a failed count must not fail the listing it decorates, so
/// errors are logged and reported as a count of zero. An empty query counts
/// every execution.
pub async fn fetch_workflow_count(
    namespace: &str,
    query: &str,
    transport: &dyn CountTransport,
) -> WorkflowCount {
    let route = route_for_api(
        ApiRoute::WorkflowsCount,
        &RouteParameters::namespace(namespace),
    );
    let query = (!query.is_empty()).then_some(query);

    match transport.count_workflows(&route, query).await {
        Ok(response) => WorkflowCount {
            count: response.count,
        },
        Err(e) => {
            warn!(namespace = %namespace, error = %e, "workflow count failed, reporting zero");
            WorkflowCount { count: 0 }
        }
    }
}

/// Counts executions in `namespace` matching `query`, grouped by execution
/// status.
///
/// # Errors
///
/// Returns the `HistoryError` raised by the transport.
pub async fn fetch_workflow_count_by_execution_status(
    namespace: &str,
    query: &str,
    transport: &dyn CountTransport,
) -> Result<CountWorkflowExecutionsResponse, HistoryError> {
    let route = route_for_api(
        ApiRoute::WorkflowsCount,
        &RouteParameters::namespace(namespace),
    );
    let query = if query.is_empty() {
        GROUP_BY_EXECUTION_STATUS.to_owned()
    } else {
        format!("{query} {GROUP_BY_EXECUTION_STATUS}")
    };

    transport.count_workflows(&route, Some(&query)).await
}
