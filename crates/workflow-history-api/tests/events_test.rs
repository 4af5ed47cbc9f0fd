//! Integration tests for the workflow run event routes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use workflow_history_core::page::HistoryPage;
use workflow_history_core::route::ApiRoute;
use workflow_history_test_support::{ScriptedTransport, page_of, raw_event};

fn three_pages() -> ScriptedTransport {
    ScriptedTransport::new()
        .with_page("", page_of(&[1, 2], "A"))
        .with_page("A", page_of(&[3, 4], "B"))
        .with_page("B", page_of(&[5, 6], ""))
}

#[tokio::test]
async fn test_events_drains_every_page_and_normalizes() {
    let transport = Arc::new(three_pages());
    let app = common::build_test_app(transport.clone());

    let (status, json) = common::get_json(app, &format!("{}/events", common::RUN_PATH)).await;

    assert_eq!(status, StatusCode::OK);
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["id"], 1);
    assert_eq!(events[0]["eventType"], "WorkflowTaskScheduled");
    assert_eq!(events[0]["category"], "command");
    assert_eq!(events[5]["id"], 6);
    assert_eq!(transport.calls().len(), 3);
    assert!(
        transport
            .called_routes()
            .iter()
            .all(|route| *route == ApiRoute::EventsDescending)
    );
}

#[tokio::test]
async fn test_raw_events_with_ascending_sort_returns_wire_events() {
    let transport = Arc::new(
        ScriptedTransport::new().with_route_page(ApiRoute::EventsAscending, "", page_of(&[1], "")),
    );
    let app = common::build_test_app(transport.clone());

    let (status, json) = common::get_json(
        app,
        &format!("{}/events/raw?sort=ascending", common::RUN_PATH),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["eventId"], "1");
    assert_eq!(json[0]["eventType"], "EVENT_TYPE_WORKFLOW_TASK_SCHEDULED");
    assert_eq!(json[0]["taskId"], "1048576");
}

#[tokio::test]
async fn test_events_mid_drain_failure_returns_502() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .with_page("", page_of(&[1, 2], "A"))
            .with_failure("A"),
    );
    let app = common::build_test_app(transport);

    let (status, json) = common::get_json(app, &format!("{}/events", common::RUN_PATH)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "upstream_unreachable");
}

#[tokio::test]
async fn test_preview_returns_empty_list_when_upstream_fails() {
    let transport = Arc::new(ScriptedTransport::new().with_failure(""));
    let app = common::build_test_app(transport.clone());

    let (status, json) =
        common::get_json(app, &format!("{}/events/preview", common::RUN_PATH)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
    assert_eq!(transport.calls()[0].1.page_size, Some(20));
}

#[tokio::test]
async fn test_start_and_end_returns_both_previews() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .with_route_page(ApiRoute::EventsAscending, "", page_of(&[1, 2], "x"))
            .with_route_page(ApiRoute::EventsDescending, "", page_of(&[10, 9], "y")),
    );
    let app = common::build_test_app(transport);

    let (status, json) =
        common::get_json(app, &format!("{}/events/start-and-end", common::RUN_PATH)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["start"][0]["id"], 1);
    assert_eq!(json["start"][1]["id"], 2);
    assert_eq!(json["end"][0]["id"], 10);
    assert_eq!(json["end"][1]["id"], 9);
}

#[tokio::test]
async fn test_page_with_category_filters_items_but_keeps_token() {
    let transport = Arc::new(ScriptedTransport::new().with_page(
        "A",
        HistoryPage::new(
            vec![
                raw_event(3, "EVENT_TYPE_ACTIVITY_TASK_SCHEDULED"),
                raw_event(4, "EVENT_TYPE_TIMER_STARTED"),
            ],
            "B",
        ),
    ));
    let app = common::build_test_app(transport.clone());

    let (status, json) = common::get_json(
        app,
        &format!(
            "{}/events/page?category=timer&next_page_token=A&page_size=100",
            common::RUN_PATH
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["id"], 4);
    assert_eq!(json["nextPageToken"], "B");
    assert_eq!(transport.calls()[0].1.page_size, Some(100));
}

#[tokio::test]
async fn test_page_filtered_to_nothing_still_returns_next_token() {
    let transport = Arc::new(ScriptedTransport::new().with_page("", page_of(&[1, 2], "A")));
    let app = common::build_test_app(transport);

    let (status, json) = common::get_json(
        app,
        &format!("{}/events/page?category=signal", common::RUN_PATH),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"], serde_json::json!([]));
    assert_eq!(json["nextPageToken"], "A");
}

#[tokio::test]
async fn test_compact_page_reads_ascending_regardless_of_sort() {
    let transport = Arc::new(ScriptedTransport::new().with_page("", page_of(&[1], "")));
    let app = common::build_test_app(transport.clone());

    let (status, json) = common::get_json(
        app,
        &format!(
            "{}/events/page?compact=true&sort=descending",
            common::RUN_PATH
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nextPageToken"], "");
    assert_eq!(transport.called_routes(), vec![ApiRoute::EventsAscending]);
}

#[tokio::test]
async fn test_page_with_unknown_category_returns_400() {
    let transport = Arc::new(ScriptedTransport::new());
    let app = common::build_test_app(transport.clone());

    let (status, json) = common::get_json(
        app,
        &format!("{}/events/page?category=timers", common::RUN_PATH),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert!(transport.calls().is_empty());
}
