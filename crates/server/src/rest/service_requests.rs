use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::gateway::{self, GatewayError};
use shared_types::{
    ApprovalForward, ApproveServiceRequest, ErrorMessageResponse, FlaggedErrorResponse,
    RequestListResponse, ScheduleServiceRequest, SuccessResponse, UpdateResultResponse,
    UpdateServiceRequest, UpdateServiceStatusRequest, TERMINAL_STATUS_MESSAGE,
};

// ---------------------------------------------------------------------------
// Envelope helpers
// ---------------------------------------------------------------------------

/// Error reply for the list and update routes: `{ "success": false, "error": … }`.
fn flagged_error(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(FlaggedErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

/// Error reply for the schedule, approve, and by-id routes: `{ "error": … }`.
fn plain_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorMessageResponse { error })).into_response()
}

/// Mirror the upstream HTTP status on the way back to the browser; an
/// out-of-range value degrades to 502 rather than panicking the handler.
fn mirrored_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

// ---------------------------------------------------------------------------
// GET /api/get-service-requests
// ---------------------------------------------------------------------------

/// Fetch all service requests through the gateway.
///
/// `requests` is always an array: the gateway's three list shapes (bare
/// array, `data` wrapper, `requests` wrapper) are collapsed, and anything
/// unrecognizable becomes an empty list.
#[utoipa::path(
    get,
    path = "/api/get-service-requests",
    responses(
        (status = 200, description = "Normalized request list", body = RequestListResponse),
        (status = 500, description = "Gateway not configured or unreachable", body = FlaggedErrorResponse)
    ),
    tag = "service-requests"
)]
pub async fn get_service_requests() -> Response {
    match gateway::fetch_service_items().await {
        Ok(requests) => (
            StatusCode::OK,
            Json(RequestListResponse {
                success: true,
                requests,
            }),
        )
            .into_response(),
        Err(GatewayError::NotConfigured(_)) => flagged_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error".to_string(),
        ),
        Err(GatewayError::Upstream { status, body }) => flagged_error(
            mirrored_status(status),
            gateway::upstream_error_text(&body),
        ),
        Err(GatewayError::Network(_)) => flagged_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        ),
    }
}

// ---------------------------------------------------------------------------
// POST /api/schedule-service
// ---------------------------------------------------------------------------

/// Forward a new service request to the gateway.
///
/// The body travels verbatim. A 2xx upstream reply whose body is not JSON
/// still counts as success, since the gateway acknowledges some writes with
/// plain text.
#[utoipa::path(
    post,
    path = "/api/schedule-service",
    request_body = ScheduleServiceRequest,
    responses(
        (status = 200, description = "Accepted; upstream payload relayed when present", body = SuccessResponse),
        (status = 500, description = "Gateway not configured or unreachable", body = ErrorMessageResponse)
    ),
    tag = "service-requests"
)]
pub async fn schedule_service(Json(body): Json<Value>) -> Response {
    match gateway::forward_schedule(&body).await {
        Ok(Some(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(None) => (StatusCode::OK, Json(SuccessResponse { success: true })).into_response(),
        Err(GatewayError::NotConfigured(_)) => plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error".to_string(),
        ),
        Err(GatewayError::Upstream { status, body }) => plain_error(
            mirrored_status(status),
            gateway::upstream_error_text(&body),
        ),
        Err(GatewayError::Network(_)) => plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        ),
    }
}

// ---------------------------------------------------------------------------
// POST /api/approve-service-request
// ---------------------------------------------------------------------------

/// Forward an approval decision to the gateway.
///
/// `approvalStatus: false` is an explicit deny and goes through; only an
/// *absent* id or decision is rejected, before anything leaves the server.
#[utoipa::path(
    post,
    path = "/api/approve-service-request",
    request_body = ApproveServiceRequest,
    responses(
        (status = 200, description = "Upstream decision payload relayed"),
        (status = 400, description = "Missing id or decision", body = ErrorMessageResponse),
        (status = 500, description = "Gateway not configured or unreachable", body = ErrorMessageResponse)
    ),
    tag = "service-requests"
)]
pub async fn approve_service_request(Json(body): Json<ApproveServiceRequest>) -> Response {
    let id = body.service_request_id.as_deref().unwrap_or("");
    let Some(approval_status) = body.approval_status else {
        return plain_error(StatusCode::BAD_REQUEST, "Missing required fields".to_string());
    };
    if id.is_empty() {
        return plain_error(StatusCode::BAD_REQUEST, "Missing required fields".to_string());
    }

    let forward = ApprovalForward {
        approval_status,
        approved_by: body.approved_by.clone(),
    };
    match gateway::forward_approval(id, &forward).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(GatewayError::NotConfigured(_)) => plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error".to_string(),
        ),
        Err(GatewayError::Upstream { status, .. }) => plain_error(
            mirrored_status(status),
            "Failed to approve service request".to_string(),
        ),
        Err(GatewayError::Network(_)) => plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    }
}

// ---------------------------------------------------------------------------
// PATCH /api/update-service-request-status
// ---------------------------------------------------------------------------

/// Forward a composite-key status update to the gateway.
///
/// When the record is found in the current list and already sits in a
/// terminal status, the update is refused with 409 and never forwarded.
/// A record that cannot be located (or a failed lookup) forwards as usual;
/// the gateway stays authoritative.
#[utoipa::path(
    patch,
    path = "/api/update-service-request-status",
    request_body = UpdateServiceStatusRequest,
    responses(
        (status = 200, description = "Update forwarded", body = UpdateResultResponse),
        (status = 409, description = "Request already completed or denied", body = FlaggedErrorResponse),
        (status = 500, description = "Gateway not configured or unreachable", body = FlaggedErrorResponse)
    ),
    tag = "service-requests"
)]
pub async fn update_service_request_status(Json(body): Json<UpdateServiceStatusRequest>) -> Response {
    if let (Some(service_id), Some(requested_at)) = (&body.service_id, &body.requested_at) {
        let current = gateway::find_current_status(|r| {
            &r.id == service_id && &r.requested_at == requested_at
        })
        .await;
        if current.is_some_and(|s| s.is_terminal()) {
            return flagged_error(StatusCode::CONFLICT, TERMINAL_STATUS_MESSAGE.to_string());
        }
    }

    let forward = match serde_json::to_value(&body) {
        Ok(v) => v,
        Err(_) => {
            return flagged_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            )
        }
    };
    match gateway::forward_status_update(&forward).await {
        Ok(result) => (
            StatusCode::OK,
            Json(UpdateResultResponse {
                success: true,
                result: Some(result),
            }),
        )
            .into_response(),
        Err(e) => update_error(e),
    }
}

// ---------------------------------------------------------------------------
// PATCH /api/service-request/{id}
// ---------------------------------------------------------------------------

/// Forward a by-id update to the gateway.
///
/// Terminal-status enforcement applies exactly as on the composite route.
#[utoipa::path(
    patch,
    path = "/api/service-request/{id}",
    params(("id" = String, Path, description = "Service request id")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Update forwarded", body = UpdateResultResponse),
        (status = 400, description = "Missing service id", body = FlaggedErrorResponse),
        (status = 409, description = "Request already completed or denied", body = FlaggedErrorResponse),
        (status = 500, description = "Gateway not configured or unreachable", body = FlaggedErrorResponse)
    ),
    tag = "service-requests"
)]
pub async fn update_service_request(
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if id.trim().is_empty() {
        return missing_service_id().await;
    }

    let current = gateway::find_current_status(|r| r.id == id).await;
    if current.is_some_and(|s| s.is_terminal()) {
        return flagged_error(StatusCode::CONFLICT, TERMINAL_STATUS_MESSAGE.to_string());
    }

    match gateway::forward_request_update(&id, &body).await {
        Ok(result) => (
            StatusCode::OK,
            Json(UpdateResultResponse {
                success: true,
                result: Some(result),
            }),
        )
            .into_response(),
        Err(e) => update_error(e),
    }
}

/// Companion handler for `/api/service-request` with no id segment: the
/// documented 400 envelope instead of a bare router 404.
#[utoipa::path(
    patch,
    path = "/api/service-request",
    responses(
        (status = 400, description = "Service id segment missing", body = FlaggedErrorResponse)
    ),
    tag = "service-requests"
)]
pub async fn missing_service_id() -> Response {
    flagged_error(
        StatusCode::BAD_REQUEST,
        "Missing service ID in request URL.".to_string(),
    )
}

fn update_error(e: GatewayError) -> Response {
    match e {
        GatewayError::NotConfigured(_) => flagged_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error".to_string(),
        ),
        GatewayError::Upstream { status, body } => flagged_error(
            mirrored_status(status),
            gateway::upstream_error_field(&body),
        ),
        GatewayError::Network(_) => flagged_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        ),
    }
}
