use serde_json::Value;
use shared_types::{
    extract_request_items, parse_request_list, ApprovalForward, RequestStatus, ServiceRequest,
};
use tracing;

// --- Environment helpers ---

fn gateway_host() -> Result<String, String> {
    std::env::var("API_HOST").map_err(|_| "API_HOST is not configured".to_string())
}

fn gateway_api_key() -> Result<String, String> {
    std::env::var("API_KEY").map_err(|_| "API_KEY is not configured".to_string())
}

/// Resolve the gateway endpoint and key, read fresh from the environment on
/// every call. Either one missing fails the call before anything leaves the
/// process.
fn gateway_config() -> Result<(String, String), String> {
    Ok((gateway_host()?, gateway_api_key()?))
}

/// Whether both gateway variables are currently set. Used by the health
/// endpoint; performs no outbound probe.
pub fn gateway_configured() -> bool {
    gateway_config().is_ok()
}

// --- Error type ---

/// Failure modes of a forwarded gateway call.
///
/// The upstream body is kept raw here; each route interprets it its own way
/// (plain text fallback vs. JSON `error` field extraction).
#[derive(Debug)]
pub enum GatewayError {
    /// `API_HOST` / `API_KEY` missing; no outbound call was made.
    NotConfigured(String),
    /// The gateway answered with a non-success status.
    Upstream { status: u16, body: String },
    /// The request never completed, or the success body was unreadable
    /// where a JSON body was required.
    Network(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::NotConfigured(msg) => write!(f, "gateway not configured: {}", msg),
            GatewayError::Upstream { status, body } => {
                write!(f, "gateway error ({}): {}", status, body)
            }
            GatewayError::Network(msg) => write!(f, "gateway request failed: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl GatewayError {
    /// Map to the structured error server functions hand to the client.
    /// Mirrors the per-route envelope wording so both surfaces agree.
    pub fn to_app_error(&self) -> shared_types::AppError {
        match self {
            GatewayError::NotConfigured(_) => {
                shared_types::AppError::config("Server configuration error")
            }
            GatewayError::Upstream { body, .. } => {
                shared_types::AppError::gateway(upstream_error_text(body))
            }
            GatewayError::Network(_) => shared_types::AppError::internal("Internal Server Error"),
        }
    }
}

fn resolve_config() -> Result<(String, String), GatewayError> {
    gateway_config().map_err(|e| {
        tracing::error!(error = %e, "Missing API gateway configuration");
        GatewayError::NotConfigured(e)
    })
}

async fn upstream_failure(response: reqwest::Response, context: &str) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        status = status.as_u16(),
        body = %body,
        context = context,
        "API Gateway returned an error"
    );
    GatewayError::Upstream {
        status: status.as_u16(),
        body,
    }
}

// --- Upstream error interpretation ---

/// Error text for the list and schedule routes: the raw upstream body when
/// there is one, otherwise a generic message.
pub fn upstream_error_text(body: &str) -> String {
    if body.is_empty() {
        "Error from API Gateway".to_string()
    } else {
        body.to_string()
    }
}

/// Error text for the update routes: the `error` field of an upstream JSON
/// body when present, otherwise a generic message.
pub fn upstream_error_field(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| "Upstream error".to_string())
}

// --- List fetch ---

/// Fetch every service request from the gateway, reduced to a plain array.
///
/// A success body that is not valid JSON counts as an empty list rather
/// than an error; the dashboard prefers an empty table over a dead page.
#[tracing::instrument]
pub async fn fetch_service_items() -> Result<Vec<Value>, GatewayError> {
    let (host, key) = resolve_config()?;
    let url = format!("{}/service", host);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header("Content-Type", "application/json")
        .header("x-api-key", key)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(upstream_failure(response, "Gateway list fetch failed").await);
    }

    let payload: Value = response.json().await.unwrap_or(Value::Null);
    let items = extract_request_items(payload);
    tracing::info!(count = items.len(), "Fetched service requests from gateway");
    Ok(items)
}

/// Fetch and parse the full request list into view records.
pub async fn fetch_service_requests() -> Result<Vec<ServiceRequest>, GatewayError> {
    Ok(parse_request_list(fetch_service_items().await?))
}

// --- Intake forwarding ---

/// Forward a schedule-service body to the gateway verbatim.
///
/// Returns the upstream JSON payload, or `None` when the gateway accepted
/// the request but answered with a body that is not JSON (soft success).
#[tracing::instrument(skip(body))]
pub async fn forward_schedule(body: &Value) -> Result<Option<Value>, GatewayError> {
    let (host, key) = resolve_config()?;
    let url = format!("{}/service", host);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("x-api-key", key)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(upstream_failure(response, "Gateway schedule call failed").await);
    }

    let parsed = response.json::<Value>().await.ok().filter(|v| !v.is_null());
    tracing::info!(relayed = parsed.is_some(), "Service request scheduled");
    Ok(parsed)
}

// --- Approval forwarding ---

/// Forward an approval decision to the gateway. The decision id rides in
/// the URL; only the decision fields ride in the body.
#[tracing::instrument(skip(body))]
pub async fn forward_approval(
    service_request_id: &str,
    body: &ApprovalForward,
) -> Result<Value, GatewayError> {
    let (host, key) = resolve_config()?;
    let url = format!("{}/{}/approve", host, service_request_id);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("x-api-key", key)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(upstream_failure(response, "Gateway approval call failed").await);
    }

    let result = response
        .json::<Value>()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway returned a non-JSON body: {}", e)))?;
    tracing::info!(
        service_request_id = service_request_id,
        approved = body.approval_status,
        "Approval decision forwarded"
    );
    Ok(result)
}

// --- Status update forwarding ---

/// Forward a composite-key status update to the gateway's legacy
/// `/update-status` route.
#[tracing::instrument(skip(body))]
pub async fn forward_status_update(body: &Value) -> Result<Value, GatewayError> {
    let (host, key) = resolve_config()?;
    let url = format!("{}/update-status", host);
    patch_json(&url, key, body, "Gateway status update failed").await
}

/// Forward a by-id update to the gateway's `/service/{id}` route.
#[tracing::instrument(skip(body))]
pub async fn forward_request_update(service_id: &str, body: &Value) -> Result<Value, GatewayError> {
    let (host, key) = resolve_config()?;
    let url = format!("{}/service/{}", host, service_id);
    patch_json(&url, key, body, "Gateway request update failed").await
}

async fn patch_json(
    url: &str,
    key: String,
    body: &Value,
    context: &str,
) -> Result<Value, GatewayError> {
    let client = reqwest::Client::new();
    let response = client
        .patch(url)
        .header("x-api-key", key)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(upstream_failure(response, context).await);
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| GatewayError::Network(format!("Gateway returned a non-JSON body: {}", e)))
}

// --- Terminal status precheck ---

/// Look up a record's current status ahead of a status change.
///
/// Returns `None` when the record cannot be found or the list fetch itself
/// fails; in both cases the caller forwards the update and lets the gateway
/// decide. Only a record positively observed in a terminal status blocks.
pub async fn find_current_status<F>(matches: F) -> Option<RequestStatus>
where
    F: Fn(&ServiceRequest) -> bool,
{
    let requests = match fetch_service_requests().await {
        Ok(requests) => requests,
        Err(e) => {
            tracing::warn!(error = %e, "Terminal-status precheck unavailable, forwarding update");
            return None;
        }
    };
    requests.into_iter().find(|r| matches(r)).map(|r| r.status)
}
