use axum::http::StatusCode;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn health_reports_ok_with_unconfigured_gateway() {
    let (app, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["gateway_configured"], json!(false));
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_sees_gateway_configuration() {
    let (app, _guard) = common::test_app().await;
    common::point_gateway_at("http://127.0.0.1:1");

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gateway_configured"], json!(true));
}

#[tokio::test]
async fn docs_are_absent_unless_the_flag_is_on() {
    let (app, _guard) = common::test_app().await;

    let (status, _body) = common::get(&app, "/docs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
