//! Page-at-a-time access to a workflow history.
//!
//! A cursor performs no remote call when it is created. Each requested page
//! costs exactly one call, is normalized on arrival and, if the request
//! carries a category, filtered before it is returned.
//!
//! Filtering never touches the continuation token, so a page may come back
//! with no items while more pages remain. Consumers keep requesting pages
//! until the returned token is the empty sentinel.

use serde::Serialize;
use tracing::debug;
use workflow_history_core::error::HistoryError;
use workflow_history_core::event::{EventCategory, HistoryEvent};
use workflow_history_core::normalizer::EventNormalizer;
use workflow_history_core::page::PageRequest;
use workflow_history_core::request::HistoryRequest;
use workflow_history_core::route::{ApiRoute, Route, route_for_api};
use workflow_history_core::sort::{HistoryEndpoint, endpoint_for_sort_order};
use workflow_history_core::token::ContinuationToken;
use workflow_history_core::transport::HistoryTransport;

/// One page of normalized, optionally filtered, events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    /// Events of the page that pass the category filter.
    pub items: Vec<HistoryEvent>,
    /// Token of the next page exactly as the server returned it, or the
    /// empty sentinel.
    pub next_page_token: ContinuationToken,
}

/// Stateful cursor over the pages of one workflow history.
pub struct EventPageCursor<'a> {
    transport: &'a dyn HistoryTransport,
    normalizer: &'a dyn EventNormalizer,
    route: Route,
    category: Option<EventCategory>,
    next_token: ContinuationToken,
    exhausted: bool,
}

/// Creates a cursor for `request`.
///
/// Compact requests always read oldest-first; other requests follow their
/// sort order.
#[must_use]
pub fn get_paginated_events<'a>(
    request: &HistoryRequest,
    transport: &'a dyn HistoryTransport,
    normalizer: &'a dyn EventNormalizer,
) -> EventPageCursor<'a> {
    let endpoint = if request.compact {
        HistoryEndpoint::Ascending
    } else {
        endpoint_for_sort_order(request.sort.as_deref())
    };

    EventPageCursor {
        transport,
        normalizer,
        route: route_for_api(endpoint.route(), &request.route_parameters()),
        category: request.category,
        next_token: ContinuationToken::start(),
        exhausted: false,
    }
}

impl EventPageCursor<'_> {
    /// The logical route this cursor reads from.
    #[must_use]
    pub fn endpoint(&self) -> ApiRoute {
        self.route.api
    }

    /// Loads the page identified by `token`, as supplied by the consumer.
    ///
    /// This does not move the cursor's own position.
    ///
    /// # Errors
    ///
    /// Returns the `HistoryError` raised by the transport.
    pub async fn load_page(
        &self,
        page_size_hint: Option<u32>,
        token: &ContinuationToken,
    ) -> Result<EventPage, HistoryError> {
        let request = PageRequest::at(token.clone()).with_page_size(page_size_hint);
        let page = self.transport.fetch_history(&self.route, &request).await?;
        let events = self.normalizer.normalize(page.events).await;

        let items = match self.category {
            Some(category) => events
                .into_iter()
                .filter(|event| event.category == category)
                .collect(),
            None => events,
        };

        debug!(
            endpoint = %self.route.api,
            items = items.len(),
            has_more = !page.next_page_token.is_exhausted(),
            "history page loaded"
        );

        Ok(EventPage {
            items,
            next_page_token: page.next_page_token,
        })
    }

    /// Loads the page after the last one returned by this method.
    ///
    /// Returns `Ok(None)` once a page with the empty sentinel token has been
    /// returned. A failed call leaves the position unchanged.
    ///
    /// # Errors
    ///
    /// Returns the `HistoryError` raised by the transport.
    pub async fn next_page(
        &mut self,
        page_size_hint: Option<u32>,
    ) -> Result<Option<EventPage>, HistoryError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self.load_page(page_size_hint, &self.next_token).await?;
        self.exhausted = page.next_page_token.is_exhausted();
        self.next_token = page.next_page_token.clone();
        Ok(Some(page))
    }
}
