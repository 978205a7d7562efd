use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token type discriminator. Keeps an admin session token from being
/// confused with any other JWT signed under the same secret.
const TOKEN_TYPE_SESSION: &str = "admin_session";

/// Claims carried in the `admin_auth` session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin username the session was issued for.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(default)]
    pub typ: String,
}

fn session_secret() -> Result<String, String> {
    std::env::var("SESSION_SECRET").map_err(|_| "SESSION_SECRET is not configured".to_string())
}

pub fn session_expiry_minutes() -> i64 {
    std::env::var("ADMIN_SESSION_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(480)
}

/// Sign a new session token for the given admin username.
///
/// A missing `SESSION_SECRET` is a deployment error, reported to the caller
/// rather than panicking; login responds with a configuration error.
pub fn create_session_token(username: &str) -> Result<String, String> {
    let secret = session_secret()?;
    let now = Utc::now();
    let claims = AdminClaims {
        sub: username.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_expiry_minutes())).timestamp(),
        typ: TOKEN_TYPE_SESSION.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign session token: {}", e))
}

/// Validate a session token: signature, expiry, and type discriminator.
/// Any failure (including a missing secret) reads as "no session".
pub fn validate_session_token(token: &str) -> Result<AdminClaims, String> {
    let secret = session_secret()?;
    let token_data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("Invalid session token: {}", e))?;
    if token_data.claims.typ != TOKEN_TYPE_SESSION {
        return Err("Not an admin session token".to_string());
    }
    Ok(token_data.claims)
}
