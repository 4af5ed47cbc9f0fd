//! Integration tests for the health endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use workflow_history_test_support::ScriptedTransport;

#[tokio::test]
async fn test_health_returns_200_without_calling_upstream() {
    // Arrange
    let transport = Arc::new(ScriptedTransport::new());
    let app = common::build_test_app(transport.clone());

    // Act
    let (status, json) = common::get_json(app, "/health").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "workflow-history");
    assert!(json["version"].is_string());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(ScriptedTransport::new()));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/nonexistent")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
