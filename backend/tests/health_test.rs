//! Integration tests for health endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_check() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "healthy");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_check() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "alive");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_check_with_database() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "ready");
    assert_eq!(response["checks"]["database"]["status"], "healthy");
}
