use axum::http::{header, StatusCode};
use serde_json::json;

use crate::common;

fn login_body(username: &str, password: &str) -> String {
    format!(r#"{{"username":"{username}","password":"{password}"}}"#)
}

#[tokio::test]
async fn login_with_valid_credentials_sets_session_cookie() {
    let (app, _guard) = common::test_app().await;

    let (status, headers, body) = common::post_json_raw(
        &app,
        "/api/admin-login",
        &login_body(common::TEST_ADMIN_USERNAME, common::TEST_ADMIN_PASSWORD),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let cookie = headers
        .get(header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("admin_auth="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    // 480 minutes by default
    assert!(cookie.contains("Max-Age=28800"));
}

#[tokio::test]
async fn login_with_wrong_password_answers_401_without_cookie() {
    let (app, _guard) = common::test_app().await;

    let (status, headers, body) = common::post_json_raw(
        &app,
        "/api/admin-login",
        &login_body(common::TEST_ADMIN_USERNAME, "wrong"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert!(headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn login_fails_when_no_credentials_are_configured() {
    let (app, _guard) = common::test_app().await;
    std::env::remove_var("ADMIN_USERNAME");
    std::env::remove_var("ADMIN_PASSWORD");

    let (status, _headers, body) = common::post_json_raw(
        &app,
        "/api/admin-login",
        &login_body("anything", "anything"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn empty_configured_credentials_never_match() {
    let (app, _guard) = common::test_app().await;
    std::env::set_var("ADMIN_USERNAME", "");
    std::env::set_var("ADMIN_PASSWORD", "");

    let (status, _headers, _body) =
        common::post_json_raw(&app, "/api/admin-login", &login_body("", "")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_without_session_secret_is_a_config_error() {
    let (app, _guard) = common::test_app().await;
    std::env::remove_var("SESSION_SECRET");

    let (status, _headers, body) = common::post_json_raw(
        &app,
        "/api/admin-login",
        &login_body(common::TEST_ADMIN_USERNAME, common::TEST_ADMIN_PASSWORD),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let (app, _guard) = common::test_app().await;

    let (status, headers, body) = common::post_raw(&app, "/api/admin-logout").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let cookie = headers
        .get(header::SET_COOKIE)
        .expect("clearing cookie should be set")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("admin_auth="));
    assert!(cookie.contains("Max-Age=0"));
}
