//! Workflow history gateway: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use workflow_history_core::error::HistoryError;

/// Startup and runtime errors for the gateway server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The upstream client could not be created.
    #[error("client error: {0}")]
    Client(#[from] HistoryError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Retrieval from the upstream workflow API failed.
    #[error(transparent)]
    History(#[from] HistoryError),

    /// A request parameter could not be interpreted.
    #[error("validation error: {0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::History(e) if e.is_remote() => StatusCode::BAD_GATEWAY,
            ApiError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let error_code = match &self {
            ApiError::History(HistoryError::Transport(_)) => "upstream_unreachable",
            ApiError::History(HistoryError::Status { .. }) => "upstream_error",
            ApiError::History(HistoryError::Decode(_)) => "upstream_decode_error",
            ApiError::History(HistoryError::Config(_)) => "configuration_error",
            ApiError::Validation(_) => "validation_error",
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
