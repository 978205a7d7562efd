use dioxus::prelude::*;
use shared_types::{FeatureFlags, ScheduleServiceRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogRoot, DialogTitle, FormSelect, Input,
    Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::helpers::format_phone_input;

/// The services customers can request, in menu order.
const SERVICES: [&str; 8] = [
    "Residential Electrical",
    "Commercial Services",
    "Emergency Services",
    "Maintenance",
    "Lighting Installation",
    "Panel Upgrades",
    "Generator Installation",
    "Electrical Inspections",
];

/// Intake form for new service requests, rendered as a modal dialog.
///
/// - `open`: whether the dialog is visible
/// - `on_close`: called when the user dismisses the dialog or after a
///   successful submission
///
/// Every field is required; the phone input auto-formats to
/// `(XXX) XXX-XXXX` and validation wants exactly ten digits. Submission
/// stamps the current instant and posts through the scheduling proxy.
#[component]
pub fn ServiceRequestModal(open: bool, on_close: EventHandler<()>) -> Element {
    let toast = use_toast();
    let flags: FeatureFlags = use_context();

    let mut customer_name = use_signal(String::new);
    let mut customer_email = use_signal(String::new);
    let mut customer_phone = use_signal(String::new);
    let mut service_type = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let mut clear_error = move |field: &str| {
        if errors.read().contains_key(field) {
            errors.write().remove(field);
        }
    };

    let mut reset_form = move || {
        customer_name.set(String::new());
        customer_email.set(String::new());
        customer_phone.set(String::new());
        service_type.set(String::new());
        description.set(String::new());
        errors.set(HashMap::new());
    };

    let mut validate = move || -> bool {
        let mut found = HashMap::new();
        if customer_name.read().trim().is_empty() {
            found.insert("customerName".to_string(), "Name is required".to_string());
        }
        if customer_email.read().trim().is_empty() {
            found.insert("customerEmail".to_string(), "Email is required".to_string());
        }
        let digits = customer_phone
            .read()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if customer_phone.read().trim().is_empty() {
            found.insert("customerPhone".to_string(), "Phone is required".to_string());
        } else if digits != 10 {
            found.insert(
                "customerPhone".to_string(),
                "Phone number must be 10 digits".to_string(),
            );
        }
        if service_type.read().trim().is_empty() {
            found.insert(
                "serviceType".to_string(),
                "Service type is required".to_string(),
            );
        }
        if description.read().trim().is_empty() {
            found.insert(
                "description".to_string(),
                "Description is required".to_string(),
            );
        }
        let ok = found.is_empty();
        errors.set(found);
        ok
    };

    let maintenance = flags.maintenance;
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *in_flight.read() || !validate() {
            return;
        }
        if maintenance {
            toast.error(
                "Scheduling is temporarily paused for maintenance. Please call us instead."
                    .to_string(),
                ToastOptions::new(),
            );
            return;
        }

        let request = ScheduleServiceRequest {
            customer_name: customer_name.read().trim().to_string(),
            customer_email: customer_email.read().trim().to_string(),
            customer_phone: customer_phone.read().clone(),
            service_type: service_type.read().clone(),
            description: description.read().trim().to_string(),
            requested_at: chrono::Utc::now().to_rfc3339(),
        };

        spawn(async move {
            in_flight.set(true);
            match server::api::schedule_service_request(request).await {
                Ok(()) => {
                    reset_form();
                    on_close.call(());
                    toast.success(
                        "Service request submitted! We'll be in touch soon.".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        toast.error(
                            shared_types::AppError::friendly_message(&err_str),
                            ToastOptions::new(),
                        );
                    } else {
                        errors.set(fe);
                    }
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./service_request_modal.css") }

        DialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Request Service" }

                if maintenance {
                    div { class: "intake-maintenance-notice",
                        "Online scheduling is paused for maintenance. Please call us to book a visit."
                    }
                }

                form { class: "intake-form", onsubmit: handle_submit,
                    Input {
                        placeholder: "Your Name",
                        value: customer_name.read().clone(),
                        error: errors.read().get("customerName").cloned().unwrap_or_default(),
                        on_input: move |e: FormEvent| {
                            customer_name.set(e.value());
                            clear_error("customerName");
                        },
                    }
                    Input {
                        input_type: "email",
                        placeholder: "Your Email",
                        value: customer_email.read().clone(),
                        error: errors.read().get("customerEmail").cloned().unwrap_or_default(),
                        on_input: move |e: FormEvent| {
                            customer_email.set(e.value());
                            clear_error("customerEmail");
                        },
                    }
                    Input {
                        input_type: "tel",
                        placeholder: "(123) 456-7890",
                        value: customer_phone.read().clone(),
                        error: errors.read().get("customerPhone").cloned().unwrap_or_default(),
                        on_input: move |e: FormEvent| {
                            customer_phone.set(format_phone_input(&e.value()));
                            clear_error("customerPhone");
                        },
                    }
                    FormSelect {
                        value: service_type.read().clone(),
                        error: errors.read().get("serviceType").cloned().unwrap_or_default(),
                        onchange: move |e: FormEvent| {
                            service_type.set(e.value());
                            clear_error("serviceType");
                        },
                        option { value: "", disabled: true, "Select Service Type" }
                        for service in SERVICES {
                            option { value: service, "{service}" }
                        }
                    }
                    Textarea {
                        placeholder: "Describe your service request",
                        value: description.read().clone(),
                        error: errors.read().get("description").cloned().unwrap_or_default(),
                        on_input: move |e: FormEvent| {
                            description.set(e.value());
                            clear_error("description");
                        },
                    }

                    div { class: "intake-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button",
                            "data-style": "primary",
                            disabled: in_flight(),
                            if in_flight() { "Submitting..." } else { "Submit" }
                        }
                    }
                }
            }
        }
    }
}
