use crate::server::{router::router, state::AppState, util::clock::FixedClock};
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;


/// Response captured from a single request against the router.
struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Bytes,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Builds a migrated database and the application router on top of it.
///
/// The context is returned so the database outlives the router in the test body.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());

    (test, router(AppState::new(db, Arc::new(clock))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

async fn post_raw(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body.to_string())).await
}
