//! Test transports: fake `HistoryTransport` and `CountTransport`
//! implementations for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use workflow_history_core::error::HistoryError;
use workflow_history_core::page::{HistoryPage, PageRequest};
use workflow_history_core::route::{ApiRoute, Route};
use workflow_history_core::transport::{
    CountTransport, CountWorkflowExecutionsResponse, HistoryTransport,
};

/// A transport that serves pre-scripted pages keyed by continuation token
/// and records every call it receives.
///
/// Pages registered with `with_route_page` only answer calls to that route
/// and take precedence over pages registered with `with_page`. Tokens
/// registered with `with_failure` fail with a transport error. Any other
/// token also fails, so a test never loops on an unscripted sequence.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    pages: HashMap<(Option<ApiRoute>, String), HistoryPage>,
    failures: HashSet<String>,
    calls: Mutex<Vec<(Route, PageRequest)>>,
}

impl ScriptedTransport {
    /// Create a transport with no scripted pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `token` on every route.
    #[must_use]
    pub fn with_page(mut self, token: &str, page: HistoryPage) -> Self {
        self.pages.insert((None, token.to_owned()), page);
        self
    }

    /// Serve `page` for `token` on `route` only.
    #[must_use]
    pub fn with_route_page(mut self, route: ApiRoute, token: &str, page: HistoryPage) -> Self {
        self.pages.insert((Some(route), token.to_owned()), page);
        self
    }

    /// Fail every request for `token`.
    #[must_use]
    pub fn with_failure(mut self, token: &str) -> Self {
        self.failures.insert(token.to_owned());
        self
    }

    /// Returns a snapshot of every `(route, request)` pair received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(Route, PageRequest)> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the logical routes called, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn called_routes(&self) -> Vec<ApiRoute> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(route, _)| route.api)
            .collect()
    }
}

#[async_trait]
impl HistoryTransport for ScriptedTransport {
    async fn fetch_history(
        &self,
        route: &Route,
        request: &PageRequest,
    ) -> Result<HistoryPage, HistoryError> {
        self.calls
            .lock()
            .unwrap()
            .push((route.clone(), request.clone()));

        let token = request.token.as_str().to_owned();
        if self.failures.contains(&token) {
            return Err(HistoryError::Transport("connection reset by peer".into()));
        }

        self.pages
            .get(&(Some(route.api), token.clone()))
            .or_else(|| self.pages.get(&(None, token.clone())))
            .cloned()
            .ok_or_else(|| HistoryError::Status {
                status: 404,
                message: format!("no page scripted for token {token:?} on {}", route.api),
            })
    }
}

/// A transport that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug, Default)]
pub struct FailingTransport {
    calls: Mutex<usize>,
}

impl FailingTransport {
    /// Create a failing transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls attempted against this transport.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl HistoryTransport for FailingTransport {
    async fn fetch_history(
        &self,
        _route: &Route,
        _request: &PageRequest,
    ) -> Result<HistoryPage, HistoryError> {
        *self.calls.lock().unwrap() += 1;
        Err(HistoryError::Transport("connection refused".into()))
    }
}

#[async_trait]
impl CountTransport for FailingTransport {
    async fn count_workflows(
        &self,
        _route: &Route,
        _query: Option<&str>,
    ) -> Result<CountWorkflowExecutionsResponse, HistoryError> {
        *self.calls.lock().unwrap() += 1;
        Err(HistoryError::Transport("connection refused".into()))
    }
}

/// A count transport that returns a fixed response and records the queries
/// it receives.
#[derive(Debug, Default)]
pub struct FixedCountTransport {
    response: CountWorkflowExecutionsResponse,
    queries: Mutex<Vec<(Route, Option<String>)>>,
}

impl FixedCountTransport {
    /// Create a transport answering every count query with `response`.
    #[must_use]
    pub fn new(response: CountWorkflowExecutionsResponse) -> Self {
        Self {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns every `(route, query)` pair received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn queries(&self) -> Vec<(Route, Option<String>)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountTransport for FixedCountTransport {
    async fn count_workflows(
        &self,
        route: &Route,
        query: Option<&str>,
    ) -> Result<CountWorkflowExecutionsResponse, HistoryError> {
        self.queries
            .lock()
            .unwrap()
            .push((route.clone(), query.map(str::to_owned)));
        Ok(self.response.clone())
    }
}
