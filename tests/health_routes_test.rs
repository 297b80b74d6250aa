// ABOUTME: HTTP integration tests for liveness, health, and readiness routes
// ABOUTME: Also checks that the assembled router echoes request ids and answers CORS preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_root_returns_liveness_text() {
    let (app, _, _) = common::memory_app();

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "Backend is running!");
}

#[tokio::test]
async fn test_health_endpoint_response_structure() {
    let (app, _, _) = common::memory_app();

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_when_store_answers() {
    let (app, _database) = common::sqlite_app().await.unwrap();

    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_reports_unavailable_after_store_closes() {
    let (app, database) = common::sqlite_app().await.unwrap();
    database.close().await;

    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _, _) = common::memory_app();

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-me-123")
        .send(app)
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-123"));
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let (app, _, _) = common::memory_app();

    let response = AxumTestRequest::options("/ingredients")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
