//! Full-drain and bounded-preview retrieval of workflow histories.
//!
//! Full drains propagate every transport failure. Previews are best effort:
//! they back non-critical views and must never fail their caller.

use serde::Serialize;
use tracing::{info, warn};
use workflow_history_core::error::HistoryError;
use workflow_history_core::event::{HistoryEvent, RawEvent};
use workflow_history_core::normalizer::EventNormalizer;
use workflow_history_core::observer::PaginationObserver;
use workflow_history_core::page::PageRequest;
use workflow_history_core::request::HistoryRequest;
use workflow_history_core::route::route_for_api;
use workflow_history_core::sort::{HistoryEndpoint, endpoint_for_sort_order};
use workflow_history_core::token::ContinuationToken;
use workflow_history_core::transport::HistoryTransport;

use crate::application::pagination::drain;

/// Page size limit used by bounded previews.
pub const PREVIEW_PAGE_SIZE: u32 = 20;

/// Earliest and most recent events of a workflow history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartAndEndEvents {
    /// Normalized events read oldest-first.
    pub start: Vec<HistoryEvent>,
    /// Normalized events read newest-first.
    pub end: Vec<HistoryEvent>,
}

async fn drain_history(
    request: &HistoryRequest,
    transport: &dyn HistoryTransport,
    observer: &dyn PaginationObserver<RawEvent>,
) -> Result<Vec<RawEvent>, HistoryError> {
    let endpoint = endpoint_for_sort_order(request.sort.as_deref());
    let route = route_for_api(endpoint.route(), &request.route_parameters());
    let route = &route;

    let events = drain(
        move |token| async move {
            transport
                .fetch_history(route, &PageRequest::at(token))
                .await
        },
        observer,
    )
    .await?;

    info!(
        namespace = %request.namespace,
        workflow_id = %request.workflow_id,
        run_id = %request.run_id,
        endpoint = %route.api,
        events = events.len(),
        "history drained"
    );
    Ok(events)
}

/// Retrieves every raw event of a workflow run, without normalization.
///
/// # Errors
///
/// Returns the first `HistoryError` raised by the transport. Nothing
/// accumulated before the failure is returned.
pub async fn fetch_raw_events(
    request: &HistoryRequest,
    transport: &dyn HistoryTransport,
    observer: &dyn PaginationObserver<RawEvent>,
) -> Result<Vec<RawEvent>, HistoryError> {
    drain_history(request, transport, observer).await
}

/// Retrieves and normalizes every event of a workflow run.
///
/// The history is drained completely before the whole batch is normalized.
///
/// # Errors
///
/// Returns the first `HistoryError` raised by the transport.
pub async fn fetch_all_events(
    request: &HistoryRequest,
    transport: &dyn HistoryTransport,
    normalizer: &dyn EventNormalizer,
    observer: &dyn PaginationObserver<RawEvent>,
) -> Result<Vec<HistoryEvent>, HistoryError> {
    let raw_events = drain_history(request, transport, observer).await?;
    Ok(normalizer.normalize(raw_events).await)
}

async fn fetch_preview(
    request: &HistoryRequest,
    endpoint: HistoryEndpoint,
    transport: &dyn HistoryTransport,
) -> Vec<RawEvent> {
    let route = route_for_api(endpoint.route(), &request.route_parameters());
    let page_request =
        PageRequest::at(ContinuationToken::start()).with_page_size(Some(PREVIEW_PAGE_SIZE));

    match transport.fetch_history(&route, &page_request).await {
        Ok(page) => page.events,
        Err(e) => {
            warn!(
                namespace = %request.namespace,
                workflow_id = %request.workflow_id,
                run_id = %request.run_id,
                endpoint = %route.api,
                error = %e,
                "history preview failed, returning no events"
            );
            Vec::new()
        }
    }
}

/// Retrieves at most `PREVIEW_PAGE_SIZE` raw events with a single call.
///
/// Never fails: any transport error yields an empty vector.
pub async fn fetch_partial_raw_events(
    request: &HistoryRequest,
    transport: &dyn HistoryTransport,
) -> Vec<RawEvent> {
    let endpoint = endpoint_for_sort_order(request.sort.as_deref());
    fetch_preview(request, endpoint, transport).await
}

/// Retrieves the first and the last events of a workflow run.
///
/// Both previews are requested concurrently, then both are normalized
/// concurrently. Either side is empty if its preview failed.
pub async fn fetch_start_and_end_events(
    request: &HistoryRequest,
    transport: &dyn HistoryTransport,
    normalizer: &dyn EventNormalizer,
) -> StartAndEndEvents {
    let (start_raw, end_raw) = tokio::join!(
        fetch_preview(request, HistoryEndpoint::Ascending, transport),
        fetch_preview(request, HistoryEndpoint::Descending, transport),
    );
    let (start, end) = tokio::join!(
        normalizer.normalize(start_raw),
        normalizer.normalize(end_raw),
    );
    StartAndEndEvents { start, end }
}
