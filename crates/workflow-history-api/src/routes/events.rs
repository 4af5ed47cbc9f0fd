//! Routes for reading the event history of one workflow run.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use workflow_history_core::event::{EventCategory, HistoryEvent, RawEvent};
use workflow_history_core::observer::TracingObserver;
use workflow_history_core::request::HistoryRequest;
use workflow_history_core::token::ContinuationToken;
use workflow_history_services::application::events_service::{self, StartAndEndEvents};
use workflow_history_services::application::page_cursor::{self, EventPage};

use crate::error::ApiError;
use crate::state::AppState;

/// Path segments identifying a workflow run.
#[derive(Debug, Deserialize)]
pub struct ExecutionPath {
    /// Namespace that owns the workflow.
    pub namespace: String,
    /// Workflow identifier.
    pub workflow_id: String,
    /// Run identifier.
    pub run_id: String,
}

impl ExecutionPath {
    fn into_request(self, sort: Option<String>) -> HistoryRequest {
        HistoryRequest {
            sort,
            ..HistoryRequest::new(self.namespace, self.workflow_id, self.run_id)
        }
    }
}

/// Query string accepted by the drain and preview routes.
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    /// `ascending` or `descending`; anything else reads newest-first.
    pub sort: Option<String>,
}

/// Query string accepted by GET /events/page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// `ascending` or `descending`; ignored for compact views.
    pub sort: Option<String>,
    /// Only return events of this category.
    pub category: Option<String>,
    /// Compact views always read oldest-first.
    #[serde(default)]
    pub compact: bool,
    /// Upper bound on events per page.
    pub page_size: Option<u32>,
    /// Token returned with the previous page; empty for the first page.
    #[serde(default)]
    pub next_page_token: String,
}

fn parse_category(raw: Option<&str>) -> Result<Option<EventCategory>, ApiError> {
    raw.filter(|value| !value.is_empty())
        .map(str::parse::<EventCategory>)
        .transpose()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

/// GET /events
#[instrument(skip(state, params), fields(namespace = %path.namespace, workflow_id = %path.workflow_id))]
async fn all_events(
    State(state): State<AppState>,
    Path(path): Path<ExecutionPath>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<HistoryEvent>>, ApiError> {
    let request_id = Uuid::new_v4();
    let request = path.into_request(params.sort);
    let observer = TracingObserver::new(request_id.to_string());

    info!(request_id = %request_id, run_id = %request.run_id, "draining history");

    let events = events_service::fetch_all_events(
        &request,
        state.transport.as_ref(),
        state.normalizer.as_ref(),
        &observer,
    )
    .await?;

    Ok(Json(events))
}

/// GET /events/raw
#[instrument(skip(state, params), fields(namespace = %path.namespace, workflow_id = %path.workflow_id))]
async fn raw_events(
    State(state): State<AppState>,
    Path(path): Path<ExecutionPath>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<RawEvent>>, ApiError> {
    let request_id = Uuid::new_v4();
    let request = path.into_request(params.sort);
    let observer = TracingObserver::new(request_id.to_string());

    info!(request_id = %request_id, run_id = %request.run_id, "draining raw history");

    let events =
        events_service::fetch_raw_events(&request, state.transport.as_ref(), &observer).await?;

    Ok(Json(events))
}

/// GET /events/preview
#[instrument(skip(state, params), fields(namespace = %path.namespace, workflow_id = %path.workflow_id))]
async fn preview_events(
    State(state): State<AppState>,
    Path(path): Path<ExecutionPath>,
    Query(params): Query<SortParams>,
) -> Json<Vec<RawEvent>> {
    let request = path.into_request(params.sort);
    Json(events_service::fetch_partial_raw_events(&request, state.transport.as_ref()).await)
}

/// GET /events/start-and-end
#[instrument(skip(state), fields(namespace = %path.namespace, workflow_id = %path.workflow_id))]
async fn start_and_end_events(
    State(state): State<AppState>,
    Path(path): Path<ExecutionPath>,
) -> Json<StartAndEndEvents> {
    let request = path.into_request(None);
    Json(
        events_service::fetch_start_and_end_events(
            &request,
            state.transport.as_ref(),
            state.normalizer.as_ref(),
        )
        .await,
    )
}

/// GET /events/page
#[instrument(skip(state, params), fields(namespace = %path.namespace, workflow_id = %path.workflow_id))]
async fn event_page(
    State(state): State<AppState>,
    Path(path): Path<ExecutionPath>,
    Query(params): Query<PageParams>,
) -> Result<Json<EventPage>, ApiError> {
    let category = parse_category(params.category.as_deref())?;
    let mut request = path.into_request(params.sort).compact(params.compact);
    request.category = category;

    let cursor = page_cursor::get_paginated_events(
        &request,
        state.transport.as_ref(),
        state.normalizer.as_ref(),
    );
    let page = cursor
        .load_page(params.page_size, &ContinuationToken::new(params.next_page_token))
        .await?;

    Ok(Json(page))
}

/// Returns the router for workflow run event history.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{namespace}/workflows/{workflow_id}/runs/{run_id}/events", get(all_events))
        .route(
            "/{namespace}/workflows/{workflow_id}/runs/{run_id}/events/raw",
            get(raw_events),
        )
        .route(
            "/{namespace}/workflows/{workflow_id}/runs/{run_id}/events/preview",
            get(preview_events),
        )
        .route(
            "/{namespace}/workflows/{workflow_id}/runs/{run_id}/events/start-and-end",
            get(start_and_end_events),
        )
        .route(
            "/{namespace}/workflows/{workflow_id}/runs/{run_id}/events/page",
            get(event_page),
        )
}
