//! Gateway configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use workflow_history_http::HttpClientConfig;
use workflow_history_http::config::DEFAULT_TIMEOUT;

use crate::error::AppError;

/// Runtime settings for the gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream workflow API (`HISTORY_UPSTREAM_URL`).
    pub upstream_url: String,
    /// Bearer token forwarded upstream (`HISTORY_ACCESS_TOKEN`).
    pub access_token: Option<String>,
    /// Upstream request timeout (`HISTORY_REQUEST_TIMEOUT_SECS`).
    pub request_timeout: Duration,
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let upstream_url = lookup("HISTORY_UPSTREAM_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AppError::Config("HISTORY_UPSTREAM_URL environment variable must be set".into())
            })?;

        let access_token = lookup("HISTORY_ACCESS_TOKEN").filter(|token| !token.is_empty());

        let request_timeout = match lookup("HISTORY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|e| {
                AppError::Config(format!("HISTORY_REQUEST_TIMEOUT_SECS must be a valid u64: {e}"))
            })?),
            None => DEFAULT_TIMEOUT,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

        Ok(Self {
            upstream_url,
            access_token,
            request_timeout,
            host,
            port,
        })
    }

    /// Settings for the upstream HTTP client.
    #[must_use]
    pub fn client_config(&self) -> HttpClientConfig {
        let config = HttpClientConfig::new(self.upstream_url.clone())
            .with_timeout(self.request_timeout);
        match &self.access_token {
            Some(token) => config.with_access_token(token.clone()),
            None => config,
        }
    }

    /// Address the server listens on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
