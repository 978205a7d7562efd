use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

/// Name of the admin session cookie.
pub const ADMIN_AUTH: &str = "admin_auth";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Build a Set-Cookie header value for the admin session token.
///
/// `SameSite=Strict`: the dashboard is first-party only, and a strict
/// cookie never rides along on cross-site navigation.
pub fn build_session_cookie(token: &str) -> HeaderValue {
    let max_age_minutes = jwt::session_expiry_minutes();
    let mut cookie = Cookie::build((ADMIN_AUTH, token))
        .http_only(true)
        .same_site(cookie::SameSite::Strict)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string()).expect("cookie header value should be valid")
}

/// Build a Set-Cookie header that clears the admin session cookie.
pub fn build_clear_session_cookie() -> HeaderValue {
    let cookie = Cookie::build((ADMIN_AUTH, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Strict)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("clear cookie should be valid")
}

/// Extract the session token from request cookies.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, ADMIN_AUTH)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Set the session cookie on a response.
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    headers.append(header::SET_COOKIE, build_session_cookie(token));
}

/// Clear the session cookie on a response.
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    headers.append(header::SET_COOKIE, build_clear_session_cookie());
}

/// Pending cookie action to be picked up by the session middleware.
/// Stored in request extensions as `Arc<Mutex<>>` so server functions can populate it.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions; reads the CookieSlot from FullstackContext extensions.
pub fn schedule_session_cookie(token: &str) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Set {
                token: token.to_string(),
            });
        }
    }
}

/// Schedule the session cookie to be cleared by the middleware.
/// Called from server functions; reads the CookieSlot from FullstackContext extensions.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Clear);
        }
    }
}
