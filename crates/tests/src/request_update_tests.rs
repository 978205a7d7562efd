use axum::http::StatusCode;
use mockito::Matcher;
use serde_json::json;
use shared_types::TERMINAL_STATUS_MESSAGE;

use crate::common;

fn record(id: &str, status: &str) -> String {
    json!([{
        "serviceId": id,
        "customerName": "Dana Ortiz",
        "serviceType": "Maintenance",
        "requestedAt": "2024-03-01T15:30:00.000Z",
        "status": status
    }])
    .to_string()
}

#[tokio::test]
async fn by_id_update_forwards_to_the_service_route() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body(record("svc-9", "Pending"))
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/service/svc-9")
        .match_header("x-api-key", common::TEST_API_KEY)
        .match_body(Matcher::Json(json!({ "status": "In Progress" })))
        .with_status(200)
        .with_body(r#"{"updated":1}"#)
        .create_async()
        .await;

    let (status, body) = common::patch_json(
        &app,
        "/api/service-request/svc-9",
        r#"{"status":"In Progress"}"#,
    )
    .await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn by_id_update_refuses_terminal_record() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let _list = server
        .mock("GET", "/service")
        .with_status(200)
        .with_body(record("svc-9", "Denied"))
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/service/svc-9")
        .expect(0)
        .create_async()
        .await;

    let (status, body) = common::patch_json(
        &app,
        "/api/service-request/svc-9",
        r#"{"status":"Pending"}"#,
    )
    .await;

    forward.assert_async().await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], TERMINAL_STATUS_MESSAGE);
}

#[tokio::test]
async fn by_id_update_without_api_key_never_calls_upstream() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    std::env::set_var("API_HOST", server.url());

    let list = server
        .mock("GET", "/service")
        .expect(0)
        .create_async()
        .await;
    let forward = server
        .mock("PATCH", "/service/svc-9")
        .expect(0)
        .create_async()
        .await;

    let (status, body) = common::patch_json(
        &app,
        "/api/service-request/svc-9",
        r#"{"status":"In Progress"}"#,
    )
    .await;

    list.assert_async().await;
    forward.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn patch_without_id_segment_answers_400_without_forwarding() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let list = server
        .mock("GET", "/service")
        .expect(0)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/service-request", r#"{"status":"Pending"}"#).await;

    list.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Missing service ID in request URL.");
}

#[tokio::test]
async fn whitespace_id_segment_answers_400() {
    let (app, _guard) = common::test_app().await;
    let mut server = mockito::Server::new_async().await;
    common::point_gateway_at(&server.url());

    let list = server
        .mock("GET", "/service")
        .expect(0)
        .create_async()
        .await;

    let (status, body) =
        common::patch_json(&app, "/api/service-request/%20", r#"{"status":"Pending"}"#).await;

    list.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing service ID in request URL.");
}
