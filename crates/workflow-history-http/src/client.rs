//! `reqwest`-backed implementation of the transport traits.
//!
//! Every call is a single `GET`; failures are mapped onto `HistoryError`
//! and returned as-is. Retrying is left to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use workflow_history_core::error::HistoryError;
use workflow_history_core::page::{HistoryPage, HistoryResponse, PageRequest};
use workflow_history_core::route::Route;
use workflow_history_core::transport::{
    CountTransport, CountWorkflowExecutionsResponse, HistoryTransport,
};

use crate::config::HttpClientConfig;

/// Query parameter carrying the continuation token.
pub const NEXT_PAGE_TOKEN_PARAM: &str = "next_page_token";
/// Query parameter carrying the page size limit.
pub const PAGE_SIZE_PARAM: &str = "maximumPageSize";
/// Query parameter carrying a visibility query.
pub const QUERY_PARAM: &str = "query";

/// HTTP client for the workflow API.
#[derive(Debug, Clone)]
pub struct HttpHistoryClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpHistoryClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Config` if the base URL is empty or the
    /// underlying client cannot be built.
    pub fn new(config: HttpClientConfig) -> Result<Self, HistoryError> {
        if config.base_url.is_empty() {
            return Err(HistoryError::Config("base URL not configured".to_owned()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HistoryError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, route: &Route) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), route.path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: &[(&str, String)],
    ) -> Result<T, HistoryError> {
        let url = self.url(route);
        debug!(route = %route.api, url = %url, "requesting");

        let mut builder = self.client.get(&url).query(&route.query).query(params);
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HistoryError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| HistoryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HistoryTransport for HttpHistoryClient {
    async fn fetch_history(
        &self,
        route: &Route,
        request: &PageRequest,
    ) -> Result<HistoryPage, HistoryError> {
        let mut params = Vec::new();
        if !request.token.is_exhausted() {
            params.push((NEXT_PAGE_TOKEN_PARAM, request.token.as_str().to_owned()));
        }
        if let Some(page_size) = request.page_size {
            params.push((PAGE_SIZE_PARAM, page_size.to_string()));
        }

        let response: HistoryResponse = self.get_json(route, &params).await?;
        Ok(HistoryPage::from(response))
    }
}

#[async_trait]
impl CountTransport for HttpHistoryClient {
    async fn count_workflows(
        &self,
        route: &Route,
        query: Option<&str>,
    ) -> Result<CountWorkflowExecutionsResponse, HistoryError> {
        let params: Vec<(&str, String)> = query
            .map(|q| vec![(QUERY_PARAM, q.to_owned())])
            .unwrap_or_default();
        self.get_json(route, &params).await
    }
}
