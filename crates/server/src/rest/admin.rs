use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::{self, cookies, jwt};
use shared_types::{AdminLoginRequest, FlaggedErrorResponse, SuccessResponse};

// ---------------------------------------------------------------------------
// POST /api/admin-login
// ---------------------------------------------------------------------------

/// Exchange admin credentials for a session cookie.
///
/// A wrong pair answers 401 with no further detail, as does a deployment
/// with no credentials configured. A missing signing secret is a
/// server-side configuration error and answers 500.
#[utoipa::path(
    post,
    path = "/api/admin-login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Session issued; cookie set", body = SuccessResponse),
        (status = 401, description = "Invalid credentials", body = SuccessResponse),
        (status = 500, description = "Session signing not configured", body = FlaggedErrorResponse)
    ),
    tag = "admin"
)]
pub async fn admin_login(Json(body): Json<AdminLoginRequest>) -> Response {
    if !auth::verify_admin_credentials(&body.username, &body.password) {
        tracing::info!(username = %body.username, "Admin login rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Json(SuccessResponse { success: false }),
        )
            .into_response();
    }

    let token = match jwt::create_session_token(&body.username) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "Cannot issue admin session");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FlaggedErrorResponse {
                    success: false,
                    error: "Server configuration error".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(username = %body.username, "Admin session issued");
    let mut response = (StatusCode::OK, Json(SuccessResponse { success: true })).into_response();
    cookies::set_session_cookie(response.headers_mut(), &token);
    response
}

// ---------------------------------------------------------------------------
// POST /api/admin-logout
// ---------------------------------------------------------------------------

/// Clear the admin session cookie.
#[utoipa::path(
    post,
    path = "/api/admin-logout",
    responses(
        (status = 200, description = "Session cleared", body = SuccessResponse)
    ),
    tag = "admin"
)]
pub async fn admin_logout() -> Response {
    let mut response = (StatusCode::OK, Json(SuccessResponse { success: true })).into_response();
    cookies::clear_session_cookie(response.headers_mut());
    response
}
