use axum::Router;
use shared_types::{
    AdminLoginRequest, AppError, AppErrorKind, ApproveServiceRequest, ErrorMessageResponse,
    FlaggedErrorResponse, RequestListResponse, RequestStatus, ScheduleServiceRequest,
    ServiceRequest, SuccessResponse, UpdateResultResponse, UpdateServiceRequest,
    UpdateServiceStatusRequest,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::service_requests::get_service_requests,
        rest::service_requests::schedule_service,
        rest::service_requests::approve_service_request,
        rest::service_requests::update_service_request_status,
        rest::service_requests::update_service_request,
        rest::service_requests::missing_service_id,
        rest::admin::admin_login,
        rest::admin::admin_logout,
        health::health_check,
    ),
    components(schemas(
        ServiceRequest, RequestStatus,
        ScheduleServiceRequest, ApproveServiceRequest,
        UpdateServiceStatusRequest, UpdateServiceRequest, AdminLoginRequest,
        RequestListResponse, UpdateResultResponse, SuccessResponse,
        FlaggedErrorResponse, ErrorMessageResponse,
        AppError, AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "service-requests", description = "Service request proxy endpoints"),
        (name = "admin", description = "Admin session endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "One Way Electric API",
        description = "Electrical service scheduling and administration API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API at `/api/*`, the health
/// probe at `/health`, and (when the `docs` flag is on) Scalar at `/docs`.
pub fn api_router() -> Router {
    let flags = crate::config::feature_flags();

    let mut router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check));

    if flags.docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
}
