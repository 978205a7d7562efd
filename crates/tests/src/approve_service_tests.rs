use axum::http::StatusCode;
use mockito::Matcher;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn approve_forwards_decision_with_id_in_url() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let mock = server
        .mock("POST", "/svc-41/approve")
        .match_header("x-api-key", common::TEST_API_KEY)
        .match_body(Matcher::Json(json!({
            "approvalStatus": true,
            "approvedBy": "oneway-admin"
        })))
        .with_status(200)
        .with_body(r#"{"approved":true}"#)
        .create_async()
        .await;

    let (status, body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"serviceRequestId":"svc-41","approvalStatus":true,"approvedBy":"oneway-admin"}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approved"], json!(true));
}

#[tokio::test]
async fn approve_false_is_a_valid_deny_decision() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let mock = server
        .mock("POST", "/svc-41/approve")
        .match_body(Matcher::Json(json!({ "approvalStatus": false })))
        .with_status(200)
        .with_body(r#"{"approved":false}"#)
        .create_async()
        .await;

    let (status, _body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"serviceRequestId":"svc-41","approvalStatus":false}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn approve_with_absent_decision_is_rejected_before_forwarding() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let mock = server
        .mock("POST", Matcher::Regex("/approve".to_string()))
        .expect(0)
        .create_async()
        .await;

    let (status, body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"serviceRequestId":"svc-41"}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn approve_with_missing_id_is_rejected_before_forwarding() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let mock = server
        .mock("POST", Matcher::Regex("/approve".to_string()))
        .expect(0)
        .create_async()
        .await;

    let (status, body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"approvalStatus":true}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn approve_without_api_key_never_calls_upstream() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    // Host configured but no key: the handler must fail before any call.
    std::env::set_var("API_HOST", server.url());

    let mock = server
        .mock("POST", Matcher::Regex("/approve".to_string()))
        .expect(0)
        .create_async()
        .await;

    let (status, body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"serviceRequestId":"svc-41","approvalStatus":true}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn approve_upstream_failure_reports_fixed_message() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _mock = server
        .mock("POST", "/svc-41/approve")
        .with_status(502)
        .with_body(r#"{"error":"backend unavailable"}"#)
        .create_async()
        .await;

    let (status, body) = common::post_json(
        &app,
        "/api/approve-service-request",
        r#"{"serviceRequestId":"svc-41","approvalStatus":true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to approve service request");
}
