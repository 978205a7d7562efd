pub mod admin;
pub mod service_requests;

use axum::{
    routing::{get, patch, post},
    Router,
};

/// Build the REST API router for the gateway proxy and admin session routes.
///
/// Every handler here is a thin front for the AWS API Gateway; the server
/// holds the `x-api-key` so the browser never sees it.
pub fn api_router() -> Router {
    Router::new()
        // Service request proxy
        .route("/api/get-service-requests", get(service_requests::get_service_requests))
        .route("/api/schedule-service", post(service_requests::schedule_service))
        .route("/api/approve-service-request", post(service_requests::approve_service_request))
        .route("/api/update-service-request-status", patch(service_requests::update_service_request_status))
        .route("/api/service-request/{id}", patch(service_requests::update_service_request))
        // A PATCH with no id segment gets an explicit 400 instead of axum's 404
        .route("/api/service-request", patch(service_requests::missing_service_id))
        // Admin session
        .route("/api/admin-login", post(admin::admin_login))
        .route("/api/admin-logout", post(admin::admin_logout))
}
