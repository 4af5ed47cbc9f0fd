//! Integration tests for the workflow count routes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use workflow_history_test_support::{FailingTransport, FixedCountTransport, ScriptedTransport};

#[tokio::test]
async fn test_workflow_count_returns_upstream_count() {
    let counts = Arc::new(FixedCountTransport::new(common::count_response()));
    let app = common::build_test_app_with(Arc::new(ScriptedTransport::new()), counts.clone());

    let (status, json) = common::get_json(
        app,
        "/api/v1/namespaces/default/workflow-count?query=WorkflowType%3D%27Order%27",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
    assert_eq!(
        counts.queries()[0].1.as_deref(),
        Some("WorkflowType='Order'")
    );
}

#[tokio::test]
async fn test_workflow_count_reports_zero_when_upstream_fails() {
    let app = common::build_test_app_with(
        Arc::new(ScriptedTransport::new()),
        Arc::new(FailingTransport::new()),
    );

    let (status, json) = common::get_json(app, "/api/v1/namespaces/default/workflow-count").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_count_by_status_returns_groups() {
    let counts = Arc::new(FixedCountTransport::new(common::count_response()));
    let app = common::build_test_app_with(Arc::new(ScriptedTransport::new()), counts.clone());

    let (status, json) = common::get_json(
        app,
        "/api/v1/namespaces/default/workflow-count/by-status",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
    assert_eq!(json["groups"][0]["groupValues"][0], "Completed");
    assert_eq!(
        counts.queries()[0].1.as_deref(),
        Some("GROUP BY ExecutionStatus")
    );
}

#[tokio::test]
async fn test_count_by_status_maps_upstream_failure_to_502() {
    let app = common::build_test_app_with(
        Arc::new(ScriptedTransport::new()),
        Arc::new(FailingTransport::new()),
    );

    let (status, json) = common::get_json(
        app,
        "/api/v1/namespaces/default/workflow-count/by-status",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "upstream_unreachable");
}
