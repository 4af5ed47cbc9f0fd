//! Logical API routes and their concrete paths.

use std::fmt;

use urlencoding::encode;

/// Logical endpoints of the workflow API used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    /// History, oldest event first.
    EventsAscending,
    /// History, newest event first.
    EventsDescending,
    /// Workflow execution count for a namespace.
    WorkflowsCount,
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EventsAscending => "events.ascending",
            Self::EventsDescending => "events.descending",
            Self::WorkflowsCount => "workflows.count",
        })
    }
}

/// Identifiers interpolated into route paths.
///
/// Routes that are scoped to a namespace ignore the workflow fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteParameters<'a> {
    /// Namespace segment.
    pub namespace: &'a str,
    /// Workflow identifier segment.
    pub workflow_id: Option<&'a str>,
    /// Run identifier, sent as `execution.runId`.
    pub run_id: Option<&'a str>,
}

impl<'a> RouteParameters<'a> {
    /// Parameters for namespace-scoped routes.
    #[must_use]
    pub fn namespace(namespace: &'a str) -> Self {
        Self {
            namespace,
            workflow_id: None,
            run_id: None,
        }
    }
}

/// A resolved endpoint: path relative to the API base URL plus fixed query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The logical route this was resolved from.
    pub api: ApiRoute,
    /// Percent-encoded path, starting with `/`.
    pub path: String,
    /// Query parameters that identify the resource.
    pub query: Vec<(String, String)>,
}

/// Resolves a logical route to a concrete path.
#[must_use]
pub fn route_for_api(api: ApiRoute, params: &RouteParameters<'_>) -> Route {
    let namespace = encode(params.namespace);
    let workflow_id = encode(params.workflow_id.unwrap_or_default());
    let run_query = params
        .run_id
        .map(|run_id| vec![("execution.runId".to_owned(), run_id.to_owned())])
        .unwrap_or_default();

    match api {
        ApiRoute::EventsAscending => Route {
            api,
            path: format!("/api/v1/namespaces/{namespace}/workflows/{workflow_id}/history"),
            query: run_query,
        },
        ApiRoute::EventsDescending => Route {
            api,
            path: format!(
                "/api/v1/namespaces/{namespace}/workflows/{workflow_id}/history-reverse"
            ),
            query: run_query,
        },
        ApiRoute::WorkflowsCount => Route {
            api,
            path: format!("/api/v1/namespaces/{namespace}/workflow-count"),
            query: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiRoute, RouteParameters, route_for_api};

    fn params() -> RouteParameters<'static> {
        RouteParameters {
            namespace: "default",
            workflow_id: Some("order/42"),
            run_id: Some("run-1"),
        }
    }

    #[test]
    fn test_ascending_route_encodes_workflow_id_and_run_id() {
        let route = route_for_api(ApiRoute::EventsAscending, &params());

        assert_eq!(
            route.path,
            "/api/v1/namespaces/default/workflows/order%2F42/history"
        );
        assert_eq!(
            route.query,
            vec![("execution.runId".to_owned(), "run-1".to_owned())]
        );
    }

    #[test]
    fn test_descending_route_uses_reverse_history() {
        let route = route_for_api(ApiRoute::EventsDescending, &params());

        assert!(route.path.ends_with("/history-reverse"));
        assert_eq!(route.api, ApiRoute::EventsDescending);
    }

    #[test]
    fn test_count_route_is_namespace_scoped() {
        let route = route_for_api(
            ApiRoute::WorkflowsCount,
            &RouteParameters::namespace("billing"),
        );

        assert_eq!(route.path, "/api/v1/namespaces/billing/workflow-count");
        assert!(route.query.is_empty());
    }
}
