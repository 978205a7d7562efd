use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a service request.
///
/// `Completed` and `Denied` are terminal: once a request lands on either,
/// no further transition is accepted anywhere in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Scheduled,
    Completed,
    Denied,
}

impl RequestStatus {
    /// Every status, in the order the dashboard presents them.
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Scheduled,
        RequestStatus::Completed,
        RequestStatus::Denied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Scheduled => "Scheduled",
            RequestStatus::Completed => "Completed",
            RequestStatus::Denied => "Denied",
        }
    }

    /// Parse an upstream status string, tolerating anything.
    ///
    /// The gateway has been observed sending absent, empty, and oddly-cased
    /// status values; all of those fall back to `Pending` rather than
    /// failing the whole list.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or("").trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(RequestStatus::Pending)
    }

    /// Terminal statuses refuse any further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Denied)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shown by the dashboard and returned by the server when a change to a
/// terminal request is refused. One string, both surfaces.
pub const TERMINAL_STATUS_MESSAGE: &str =
    "Status cannot be changed once it's completed or denied.";

// ---------------------------------------------------------------------------
// Upstream Wire Shape
// ---------------------------------------------------------------------------

/// A service request exactly as the API Gateway delivers it.
///
/// Every field is optional or defaulted: the gateway's records are not
/// uniform, and a half-filled item must still render. `PK`/`SK` are the
/// gateway's opaque persistence keys; they are tolerated on input and
/// never shown in the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApiServiceRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requested_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, rename = "PK", skip_serializing_if = "Option::is_none")]
    pub pk: Option<String>,
    #[serde(default, rename = "SK", skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard View Shape
// ---------------------------------------------------------------------------

/// A service request as the admin dashboard works with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceRequest {
    /// `serviceId` when the gateway supplied one, otherwise synthesized
    /// from the record's identifying fields. Stable across refetches.
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub description: String,
    pub requested_at: String,
    pub status: RequestStatus,
    pub is_emergency: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
}

impl From<ApiServiceRequest> for ServiceRequest {
    fn from(api: ApiServiceRequest) -> Self {
        let id = match &api.service_id {
            Some(sid) if !sid.is_empty() => sid.clone(),
            _ => synthesize_request_id(&api),
        };
        let service_type = api
            .service_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let is_emergency = service_type.to_lowercase().contains("emergency");
        let status = RequestStatus::parse_lenient(api.status.as_deref());
        Self {
            id,
            customer_name: api.customer_name,
            customer_email: api.customer_email,
            customer_phone: api.customer_phone,
            service_type,
            description: api.description,
            requested_at: api.requested_at,
            status,
            is_emergency,
            technician: api.assigned_technician.filter(|t| !t.is_empty()),
        }
    }
}

/// Build a stable identifier for a record the gateway delivered without a
/// `serviceId`.
///
/// Hashes the fields that identify a request and never change after intake,
/// so the same record keeps the same id across refetches and reorderings.
/// Two records with identical identifying fields collide; they are
/// indistinguishable anyway.
pub fn synthesize_request_id(api: &ApiServiceRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api.customer_email.as_bytes());
    hasher.update(b"|");
    hasher.update(api.requested_at.as_bytes());
    hasher.update(b"|");
    hasher.update(api.service_type.as_deref().unwrap_or("").as_bytes());
    hasher.update(b"|");
    hasher.update(api.customer_name.as_bytes());
    let digest = hasher.finalize();
    format!("req-{}", hex::encode(&digest[..8]))
}

// ---------------------------------------------------------------------------
// List Shape Normalization
// ---------------------------------------------------------------------------

/// Reduce the gateway's list payload to a plain array of items.
///
/// The gateway has shipped three shapes over time: a bare JSON array,
/// `{ "data": [...] }`, and `{ "requests": [...] }`. Anything else, or a
/// wrapper whose candidate keys hold non-arrays, yields an empty list.
pub fn extract_request_items(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["data", "requests"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Parse raw gateway items into view records, dropping nothing: an item
/// that fails to deserialize becomes an empty record rather than poisoning
/// the whole list.
pub fn parse_request_list(items: Vec<Value>) -> Vec<ServiceRequest> {
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<ApiServiceRequest>(item)
                .unwrap_or_default()
                .into()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Proxy Response Envelopes
// ---------------------------------------------------------------------------

/// Successful list response: `requests` is always an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RequestListResponse {
    pub success: bool,
    pub requests: Vec<Value>,
}

/// Successful update response, optionally carrying the upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateResultResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Error envelope for the list and status-update routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FlaggedErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Error envelope for the schedule, approve, and by-id routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorMessageResponse {
    pub error: String,
}

/// Bare success/failure flag (login and soft-success replies).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SuccessResponse {
    pub success: bool,
}
