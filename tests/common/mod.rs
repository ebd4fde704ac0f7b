#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jobboard::{config::Settings, create_app, db, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Fresh in-memory database, migrated, with rate limiting off.
pub async fn test_state() -> AppState {
    let db = db::connect("sqlite::memory:")
        .await
        .expect("in-memory database should open and migrate");
    AppState {
        db,
        settings: Arc::new(Settings {
            rate_limit_burst: 0,
            ..Settings::default()
        }),
    }
}

pub async fn test_app() -> Router {
    create_app(test_state().await)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
