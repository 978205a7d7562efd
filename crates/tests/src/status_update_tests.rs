use axum::http::StatusCode;
use mockito::Matcher;
use serde_json::json;
use shared_types::TERMINAL_STATUS_MESSAGE;

use crate::common;

/// One upstream record in the given status, keyed like the dashboard
/// updates key: serviceId plus requestedAt.
fn record(status: &str) -> String {
    json!([{
        "serviceId": "svc-7",
        "customerName": "Dana Ortiz",
        "serviceType": "Maintenance",
        "requestedAt": "2024-03-01T15:30:00.000Z",
        "status": status
    }])
    .to_string()
}

const UPDATE_BODY: &str =
    r#"{"serviceId":"svc-7","requestedAt":"2024-03-01T15:30:00.000Z","status":"Scheduled"}"#;

#[tokio::test]
async fn update_refuses_terminal_record_without_forwarding() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body(record("Completed"))
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .expect(0)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], TERMINAL_STATUS_MESSAGE);
}

#[tokio::test]
async fn update_forwards_non_terminal_record() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body(record("Pending"))
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .match_header("x-api-key", common::TEST_API_KEY)
        .match_body(Matcher::Json(json!({
            "serviceId": "svc-7",
            "requestedAt": "2024-03-01T15:30:00.000Z",
            "status": "Scheduled"
        })))
        .with_status(200)
        .with_body(r#"{"updated":1}"#)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["result"]["updated"], json!(1));
}

#[tokio::test]
async fn update_forwards_when_record_is_not_in_the_list() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .with_status(200)
        .with_body(r#"{"updated":0}"#)
        .create_async()
        .await;

    let (status, _body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_forwards_when_the_precheck_lookup_fails() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(500)
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .with_status(200)
        .with_body(r#"{"updated":1}"#)
        .create_async()
        .await;

    let (status, _body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_without_composite_key_skips_the_precheck() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let list = server
        .mock("GET", "/service")
        .expect(0)
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .match_body(Matcher::Json(json!({ "status": "Scheduled" })))
        .with_status(200)
        .with_body(r#"{"updated":1}"#)
        .create_async()
        .await;

    let (status, _body) = common::patch_json(
        &app,
        "/api/update-service-request-status",
        r#"{"status":"Scheduled"}"#,
    )
    .await;

    list.assert_async().await;
    forward.assert_async().await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_without_api_key_never_calls_upstream() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    // Host configured but no key: both the precheck and the forward must
    // fail before any call leaves the server.
    std::env::set_var("API_HOST", server.url());

    let list = server
        .mock("GET", "/service")
        .expect(0)
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/update-status")
        .expect(0)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    list.assert_async().await;
    forward.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn update_extracts_upstream_json_error_field() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let _forward = server
        .mock("PATCH", "/update-status")
        .with_status(500)
        .with_body(r#"{"error":"Record is locked"}"#)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/update-service-request-status", UPDATE_BODY).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Record is locked");
}
