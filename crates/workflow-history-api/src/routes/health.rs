//! Liveness endpoint for the gateway.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Name reported by the liveness probe.
pub const SERVICE_NAME: &str = "workflow-history";

/// Liveness response. Reports the gateway only; the upstream is not probed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: &'static str,
    /// Name of this service.
    pub service: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
