// Server-only auth helpers for server functions.

use dioxus::prelude::*;

use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's admin session from the current request.
/// Checks middleware-injected AdminClaims first, falls back to cookie parsing.
pub(crate) fn require_admin() -> Result<crate::auth::jwt::AdminClaims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: claims already validated by the session middleware
    if let Some(claims) = parts.extensions.get::<jwt::AdminClaims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse the session cookie directly
    let headers = parts.headers.clone();
    let token = cookies::extract_session_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_session_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired session").into_server_fn_error())
}
