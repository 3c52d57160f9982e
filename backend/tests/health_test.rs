//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_endpoint_checks_database() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/live").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "alive");
}
