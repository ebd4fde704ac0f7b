mod common;

use axum::http::StatusCode;
use common::{send, test_app};
use jobboard::middleware::timing::RESPONSE_TIME_HEADER;
use serde_json::json;
use std::sync::Once;

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

fn assert_timed(headers: &axum::http::HeaderMap) {
    let value = headers
        .get(RESPONSE_TIME_HEADER)
        .expect("every response carries a response time")
        .to_str()
        .unwrap();
    assert!(value.ends_with("ms"), "unexpected header value {}", value);
    value.trim_end_matches("ms").parse::<u64>().unwrap();
}

/// Every kind of response passes through the timing middleware.
#[tokio::test]
async fn test_response_time_header_on_all_routes() {
    setup();
    let app = test_app().await;

    let ok = send(&app, "GET", "/health", None).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_timed(&ok.headers);

    let page = send(&app, "GET", "/", None).await;
    assert_timed(&page.headers);

    let invalid = send(&app, "POST", "/api/jobs", Some(json!({}))).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_timed(&invalid.headers);

    let unknown = send(&app, "GET", "/khong-ton-tai", None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_timed(&unknown.headers);
}

#[tokio::test]
async fn test_home_page_renders_all_sections() {
    setup();
    let app = test_app().await;
    let response = send(&app, "GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let content_type = response.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(response.body.contains("class=\"site-header\""));
    assert!(response.body.contains("class=\"hero\""));
    assert_eq!(response.body.matches("class=\"category-card\"").count(), 4);
}

/// Employer workflow: post a job, look at a candidate, follow them, file a report.
#[tokio::test]
async fn test_employer_workflow() {
    setup();
    let app = test_app().await;

    let job = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "title": "Kỹ sư dữ liệu",
            "company": "Data Co",
            "location": "Hà Nội",
            "category": "Công nghệ thông tin",
            "salary": "Thỏa thuận"
        })),
    )
    .await;
    assert_eq!(job.status, StatusCode::CREATED);

    let listing = send(&app, "GET", "/api/jobs", None).await;
    assert_eq!(listing.json().as_array().unwrap().len(), 1);

    let view = send(
        &app,
        "POST",
        "/api/views",
        Some(json!({ "candidateId": "cand-1", "employerId": "data-co" })),
    )
    .await;
    assert_eq!(view.status, StatusCode::CREATED);

    let follow = send(
        &app,
        "POST",
        "/api/follows",
        Some(json!({
            "candidateId": "cand-1",
            "employerId": "data-co",
            "followedAt": "2025-04-01T08:30:00Z"
        })),
    )
    .await;
    assert_eq!(follow.status, StatusCode::CREATED);
    let followed_at = follow.json()["followedAt"].as_str().unwrap().to_string();
    assert!(followed_at.starts_with("2025-04-01T08:30:00"));

    let report = send(
        &app,
        "POST",
        "/api/reports",
        Some(json!({
            "employerId": "data-co",
            "reportType": "ApplicationStatus",
            "data": { "pending": 4, "accepted": 1 }
        })),
    )
    .await;
    assert_eq!(report.status, StatusCode::CREATED);
    assert!(report.json()["generatedAt"].is_string());
}
