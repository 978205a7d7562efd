use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{validate_session_token, AdminClaims};

/// Decide whether a path sits behind the admin gate.
///
/// `/admin` and everything under `/admin/` are protected; `/admin-login`
/// is the door and stays open. Every other path passes untouched.
pub fn is_gated_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// Session middleware for the whole router.
///
/// On each request:
/// 1. Validates the `admin_auth` cookie and, when valid, inserts
///    `AdminClaims` into request extensions for downstream handlers
/// 2. Redirects gated page paths to `/admin-login` when no valid session
///    is present
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie action to the response
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let headers = req.headers().clone();

    if let Some(token) = cookies::extract_session_token(&headers) {
        if let Ok(claims) = validate_session_token(&token) {
            req.extensions_mut().insert(claims);
        }
    }

    let path = req.uri().path();
    if is_gated_path(path) && req.extensions().get::<AdminClaims>().is_none() {
        return Redirect::temporary("/admin-login").into_response();
    }

    // Insert the slot so server functions can schedule cookie changes
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    // Apply any cookie action scheduled by server functions
    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set { token } => {
                cookies::set_session_cookie(response.headers_mut(), &token);
            }
            PendingCookieAction::Clear => {
                cookies::clear_session_cookie(response.headers_mut());
            }
        }
    }

    response
}
