//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use workflow_history_core::transport::{
    CountGroup, CountTransport, CountWorkflowExecutionsResponse, HistoryTransport,
};
use workflow_history_services::domain::normalizer::StandardNormalizer;
use workflow_history_test_support::{FixedCountTransport, ScriptedTransport};

use workflow_history_api::state::AppState;

/// Base path of the run used across the integration tests.
pub const RUN_PATH: &str = "/api/v1/namespaces/default/workflows/order-42/runs/run-1";

/// Count response served by the default count transport.
pub fn count_response() -> CountWorkflowExecutionsResponse {
    CountWorkflowExecutionsResponse {
        count: 3,
        groups: vec![CountGroup {
            group_values: vec![serde_json::json!("Completed")],
            count: 3,
        }],
    }
}

/// Build the full app router over a scripted history transport and a fixed
/// count transport. Uses the same route structure as `main.rs`.
pub fn build_test_app(transport: Arc<ScriptedTransport>) -> Router {
    build_test_app_with(
        transport,
        Arc::new(FixedCountTransport::new(count_response())),
    )
}

/// Build the full app router over arbitrary transports.
pub fn build_test_app_with(
    transport: Arc<dyn HistoryTransport>,
    counts: Arc<dyn CountTransport>,
) -> Router {
    let app_state = AppState::new(transport, counts, Arc::new(StandardNormalizer));
    workflow_history_api::app(app_state)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
