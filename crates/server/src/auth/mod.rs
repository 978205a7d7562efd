pub mod cookies;
pub mod jwt;
pub mod middleware;

/// Compare a login attempt against the `ADMIN_USERNAME` / `ADMIN_PASSWORD`
/// env vars. Returns `false` when either var is empty or unset; an
/// unconfigured deployment simply has no working credentials.
pub fn verify_admin_credentials(username: &str, password: &str) -> bool {
    let expected_user = std::env::var("ADMIN_USERNAME").ok().filter(|v| !v.is_empty());
    let expected_pass = std::env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty());
    match (expected_user, expected_pass) {
        (Some(user), Some(pass)) => username == user && password == pass,
        _ => false,
    }
}
