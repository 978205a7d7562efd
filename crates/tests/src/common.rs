use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware,
    Router,
};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially. The gateway and session
/// code read process environment variables on every call, so concurrent
/// tests would trample each other's `API_HOST` / credential setup.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// API key every test points the gateway at.
pub const TEST_API_KEY: &str = "test-api-key";

pub const TEST_ADMIN_USERNAME: &str = "oneway-admin";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

/// Build the full router (REST proxy, health, session middleware) with a
/// known-good environment: admin credentials and session secret set, the
/// gateway variables cleared. Tests that talk to the gateway point it at a
/// mock server afterwards with [`point_gateway_at`].
///
/// The returned `MutexGuard` must be held for the duration of the test so
/// concurrent tests cannot rewrite the shared environment.
pub async fn test_app() -> (Router, MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    std::env::set_var("SESSION_SECRET", "unit-test-session-secret");
    std::env::set_var("ADMIN_USERNAME", TEST_ADMIN_USERNAME);
    std::env::set_var("ADMIN_PASSWORD", TEST_ADMIN_PASSWORD);
    std::env::remove_var("ADMIN_SESSION_EXPIRY_MINUTES");
    std::env::remove_var("API_HOST");
    std::env::remove_var("API_KEY");

    let router = server::openapi::api_router().layer(middleware::from_fn(
        server::auth::middleware::session_middleware,
    ));

    (router, guard)
}

/// Point the gateway environment at a mock server's base URL.
pub fn point_gateway_at(url: &str) {
    std::env::set_var("API_HOST", url);
    std::env::set_var("API_KEY", TEST_API_KEY);
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// GET a route with a Cookie header.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// GET a route, returning the response headers as well.
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_raw(app, req).await
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// POST JSON, returning the response headers as well (for Set-Cookie).
pub async fn post_json_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send_raw(app, req).await
}

/// POST to a route with no body, returning the response headers.
pub async fn post_raw(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_raw(app, req).await
}

/// PATCH JSON to a route.
pub async fn patch_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// Log in with the test credentials and return the session cookie as a
/// `admin_auth=<token>` pair ready for a Cookie header.
pub async fn login_cookie(app: &Router) -> String {
    let body = format!(
        r#"{{"username":"{}","password":"{}"}}"#,
        TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD
    );
    let (status, headers, _) = post_json_raw(app, "/api/admin-login", &body).await;
    assert_eq!(status, StatusCode::OK, "test login should succeed");

    let set_cookie = headers
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair before first attribute")
        .to_string()
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, req).await;
    (status, body)
}

async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}
