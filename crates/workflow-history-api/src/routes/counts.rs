//! Routes for workflow execution counts.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::instrument;

use workflow_history_core::transport::CountWorkflowExecutionsResponse;
use workflow_history_services::application::workflow_counts::{self, WorkflowCount};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the count routes.
#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    /// Visibility query; empty counts every execution.
    #[serde(default)]
    pub query: String,
}

/// GET /{namespace}/workflow-count
#[instrument(skip(state, params))]
async fn workflow_count(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Query(params): Query<CountParams>,
) -> Json<WorkflowCount> {
    Json(workflow_counts::fetch_workflow_count(&namespace, &params.query, state.counts.as_ref()).await)
}

/// GET /{namespace}/workflow-count/by-status
#[instrument(skip(state, params))]
async fn workflow_count_by_status(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Query(params): Query<CountParams>,
) -> Result<Json<CountWorkflowExecutionsResponse>, ApiError> {
    let response = workflow_counts::fetch_workflow_count_by_execution_status(
        &namespace,
        &params.query,
        state.counts.as_ref(),
    )
    .await?;
    Ok(Json(response))
}

/// Returns the router for workflow counts.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{namespace}/workflow-count", get(workflow_count))
        .route(
            "/{namespace}/workflow-count/by-status",
            get(workflow_count_by_status),
        )
}
