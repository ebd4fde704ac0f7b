mod common;

use axum::http::StatusCode;
use common::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Service is healthy");
}

#[tokio::test]
async fn test_create_job_returns_camel_case_record() {
    let app = test_app().await;
    let response = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "title": "Nhân viên kinh doanh",
            "company": "Công ty ABC",
            "location": "Đà Nẵng",
            "category": "Kinh doanh",
            "expireDate": "2025-09-30"
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let job = response.json();
    assert!(job["id"].is_number());
    assert_eq!(job["title"], "Nhân viên kinh doanh");
    assert_eq!(job["expireDate"], "2025-09-30");
    assert!(job["salary"].is_null());
}

#[tokio::test]
async fn test_create_job_lists_every_missing_field() {
    let app = test_app().await;
    let response = send(&app, "POST", "/api/jobs", Some(json!({ "title": "Tester" }))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["company", "location", "category"]);
    assert_eq!(body["errors"][0]["message"], "Path `company` is required.");
}

#[tokio::test]
async fn test_get_job_by_id_and_missing_job() {
    let app = test_app().await;
    let created = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "title": "Designer",
            "company": "Studio",
            "location": "Huế",
            "category": "Marketing"
        })),
    )
    .await
    .json();

    let uri = format!("/api/jobs/{}", created["id"]);
    let fetched = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);

    let missing = send(&app, "GET", "/api/jobs/9999", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["error"], "Not found: job 9999");
}

#[tokio::test]
async fn test_duplicate_follow_is_a_conflict() {
    let app = test_app().await;
    let body = json!({ "candidateId": "cand-7", "employerId": "emp-3" });

    let first = send(&app, "POST", "/api/follows", Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.json()["candidateId"], "cand-7");
    assert!(first.json()["followedAt"].is_string());

    let second = send(&app, "POST", "/api/follows", Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    let other = send(
        &app,
        "POST",
        "/api/follows",
        Some(json!({ "candidateId": "cand-7", "employerId": "emp-4" })),
    )
    .await;
    assert_eq!(other.status, StatusCode::CREATED);

    let listed = send(&app, "GET", "/api/candidates/cand-7/follows", None).await;
    assert_eq!(listed.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_repeat_views_are_accepted() {
    let app = test_app().await;
    let body = json!({ "candidateId": "cand-1", "employerId": "emp-1" });
    for _ in 0..2 {
        let response = send(&app, "POST", "/api/views", Some(body.clone())).await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.json()["viewedAt"].is_string());
    }
    send(
        &app,
        "POST",
        "/api/views",
        Some(json!({ "candidateId": "cand-1", "employerId": "emp-2" })),
    )
    .await;

    let all = send(&app, "GET", "/api/candidates/cand-1/views", None).await;
    assert_eq!(all.json().as_array().unwrap().len(), 3);

    let filtered = send(&app, "GET", "/api/candidates/cand-1/views?employerId=emp-2", None).await;
    assert_eq!(filtered.json().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reports_by_type() {
    let app = test_app().await;
    for report_type in ["JobPerformance", "InterviewStatistics"] {
        let response = send(
            &app,
            "POST",
            "/api/reports",
            Some(json!({
                "employerId": "emp-9",
                "reportType": report_type,
                "data": { "total": 3 }
            })),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.json()["reportType"], report_type);
        assert_eq!(response.json()["data"]["total"], 3);
    }

    let all = send(&app, "GET", "/api/employers/emp-9/reports", None).await;
    assert_eq!(all.json().as_array().unwrap().len(), 2);

    let interviews = send(
        &app,
        "GET",
        "/api/employers/emp-9/reports?reportType=InterviewStatistics",
        None,
    )
    .await;
    let interviews = interviews.json();
    assert_eq!(interviews.as_array().unwrap().len(), 1);
    assert_eq!(interviews[0]["reportType"], "InterviewStatistics");
}

#[tokio::test]
async fn test_invalid_report_type_is_rejected() {
    let app = test_app().await;
    let response = send(
        &app,
        "POST",
        "/api/reports",
        Some(json!({ "employerId": "emp-1", "reportType": "Payroll", "data": {} })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "reportType");

    let listing = send(&app, "GET", "/api/employers/emp-1/reports?reportType=Payroll", None).await;
    assert_eq!(listing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_null_report_data_is_rejected() {
    let app = test_app().await;
    let response = send(
        &app,
        "POST",
        "/api/reports",
        Some(json!({ "employerId": "emp-1", "reportType": "JobPerformance", "data": null })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "data");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;
    let response = send(&app, "GET", "/api-doc/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let doc = response.json();
    assert!(doc["paths"]["/api/jobs"].is_object());
    assert!(doc["paths"]["/api/follows"]["post"].is_object());
    assert!(doc["components"]["schemas"]["ReportType"].is_object());
}

fn assert_json_error(response: &common::TestResponse) -> serde_json::Value {
    let content_type = response.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/json"), "got {}", content_type);
    let body = response.json();
    assert!(body["error"].is_string(), "body {}", response.body);
    body
}

#[tokio::test]
async fn test_wrong_typed_field_is_a_field_error() {
    let app = test_app().await;
    let response = send(
        &app,
        "POST",
        "/api/reports",
        Some(json!({ "employerId": "e1", "reportType": 5, "data": {} })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = assert_json_error(&response);
    assert_eq!(body["errors"][0]["field"], "reportType");

    let job = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": 123, "company": "C", "location": "L", "category": "K" })),
    )
    .await;
    assert_eq!(job.status, StatusCode::BAD_REQUEST);
    assert_eq!(assert_json_error(&job)["errors"][0]["field"], "title");
}

#[tokio::test]
async fn test_malformed_json_is_a_json_error() {
    let app = test_app().await;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/follows")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"candidateId\": "))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    // No content type at all.
    let missing = send(&app, "POST", "/api/jobs", None).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_json_error(&missing);
}

#[tokio::test]
async fn test_non_numeric_job_id_is_a_json_error() {
    let app = test_app().await;
    let response = send(&app, "GET", "/api/jobs/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = assert_json_error(&response);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request:"));
}
