use dioxus::prelude::*;
use shared_types::{RequestStatus, ScheduleServiceRequest, ServiceRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Fetch every service request for the dashboard, normalized from whatever
/// list shape the gateway responds with.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_service_requests() -> Result<Vec<ServiceRequest>, ServerFnError> {
    super::auth::require_admin()?;

    crate::gateway::fetch_service_requests()
        .await
        .map_err(|e| e.to_app_error().into_server_fn_error())
}

/// Submit a new service request from the public intake form.
///
/// Validates field-by-field before anything leaves the server, so the modal
/// can show inline errors without a gateway round trip.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn schedule_service_request(
    request: ScheduleServiceRequest,
) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    if crate::config::feature_flags().maintenance {
        return Err(AppError::bad_request("Scheduling is temporarily paused for maintenance")
            .into_server_fn_error());
    }

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    crate::gateway::forward_schedule(&body)
        .await
        .map_err(|e| e.to_app_error().into_server_fn_error())?;

    Ok(())
}

/// Change the status of a request identified by its composite key.
///
/// Refuses with a conflict when the gateway already has the request in a
/// terminal status, matching the REST route's behavior.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_request_status(
    service_id: String,
    requested_at: String,
    status: RequestStatus,
) -> Result<(), ServerFnError> {
    use shared_types::{AppError, UpdateServiceStatusRequest, TERMINAL_STATUS_MESSAGE};

    super::auth::require_admin()?;

    let current = crate::gateway::find_current_status(|r| {
        r.id == service_id && r.requested_at == requested_at
    })
    .await;
    if current.is_some_and(|s| s.is_terminal()) {
        return Err(AppError::conflict(TERMINAL_STATUS_MESSAGE).into_server_fn_error());
    }

    let forward = UpdateServiceStatusRequest {
        service_id: Some(service_id),
        requested_at: Some(requested_at),
        status: Some(status.as_str().to_string()),
    };
    let body = serde_json::to_value(&forward)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    crate::gateway::forward_status_update(&body)
        .await
        .map_err(|e| e.to_app_error().into_server_fn_error())?;

    Ok(())
}
