use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for scheduling a new service visit.
///
/// Field names match the gateway's camelCase wire format so the body can be
/// forwarded without translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleServiceRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub customer_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub customer_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_phone_digits"))
    )]
    pub customer_phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Service type is required"))
    )]
    pub service_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    /// RFC 3339 instant stamped by the client at submission time.
    pub requested_at: String,
}

#[cfg(feature = "validation")]
fn validate_phone_digits(phone: &str) -> Result<(), validator::ValidationError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits == 10 {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("phone_digits");
        err.message = Some("Phone number must be 10 digits".into());
        Err(err)
    }
}

/// Request DTO for the approval decision on a service request.
///
/// `approval_status` stays an `Option` on the wire: an explicit `false` is a
/// valid deny decision, while an absent field is a client error. Collapsing
/// the two would make denials impossible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApproveServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// Body forwarded upstream for an approval decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApprovalForward {
    pub approval_status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// Request DTO for the composite-key status update route.
///
/// All fields optional: absent keys stay absent when the body is forwarded,
/// matching how the gateway expects this legacy route to behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceStatusRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request DTO for the by-id status update route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateServiceRequest {
    pub status: String,
}

/// Request DTO for the admin login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}
