use dioxus::prelude::*;
use shared_types::FeatureFlags;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Login with the admin username and password. Sets the HTTP-only session
/// cookie on success. `Ok(false)` means the credentials were rejected.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn admin_login(username: String, password: String) -> Result<bool, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    if !crate::auth::verify_admin_credentials(&username, &password) {
        tracing::info!(username = %username, "Admin login rejected");
        return Ok(false);
    }

    let token = jwt::create_session_token(&username)
        .map_err(|e| AppError::config(e).into_server_fn_error())?;

    cookies::schedule_session_cookie(&token);
    tracing::info!(username = %username, "Admin session issued");
    Ok(true)
}

/// Logout by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    cookies::schedule_clear_cookie();
    Ok(())
}

/// Username of the currently authenticated admin, if any.
///
/// The admin layout guard calls this before rendering gated pages; `None`
/// sends the client to the login page.
#[server]
pub async fn current_admin() -> Result<Option<String>, ServerFnError> {
    Ok(super::auth::require_admin().ok().map(|claims| claims.sub))
}
