use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMail, LdPhone, LdUser, LdZap};
use dioxus_free_icons::Icon;
use shared_types::{RequestStatus, ServiceRequest, TERMINAL_STATUS_MESSAGE};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, ToastOptions,
};

use crate::helpers::{format_requested_at, quote_mailto_url};
use crate::routes::Route;

fn status_badge_variant(status: RequestStatus) -> BadgeVariant {
    match status {
        RequestStatus::Pending => BadgeVariant::Secondary,
        RequestStatus::InProgress => BadgeVariant::Primary,
        RequestStatus::Scheduled => BadgeVariant::Outline,
        RequestStatus::Completed => BadgeVariant::Success,
        RequestStatus::Denied => BadgeVariant::Destructive,
    }
}

/// One service request on the dashboard grid.
///
/// - `request`: the server-confirmed record; the displayed status always
///   reflects the last confirmed value
/// - `on_committed`: called with `(id, status)` after the server accepts a
///   change, so the shared list can be updated
///
/// Terminal requests refuse any change attempt with a warning toast and no
/// network call. Terminal targets go through a confirmation dialog first.
/// While an update is in flight the controls are disabled, and a completion
/// superseded by a newer attempt is dropped without committing or toasting.
#[component]
pub fn RequestCard(
    request: ServiceRequest,
    on_committed: EventHandler<(String, RequestStatus)>,
) -> Element {
    let toast = use_toast();
    let mut in_flight = use_signal(|| false);
    let mut generation = use_signal(|| 0u32);
    let mut confirming = use_signal(|| Option::<RequestStatus>::None);

    let current_status = request.status;

    let mut do_update = {
        let card_id = request.id.clone();
        let requested_at = request.requested_at.clone();
        move |new_status: RequestStatus| {
            let service_id = card_id.clone();
            let requested_at = requested_at.clone();
            let attempt = generation() + 1;
            generation.set(attempt);
            spawn(async move {
                in_flight.set(true);
                let result = server::api::update_request_status(
                    service_id.clone(),
                    requested_at,
                    new_status,
                )
                .await;
                if generation() != attempt {
                    // A newer attempt owns the card: drop this completion.
                    return;
                }
                match result {
                    Ok(()) => {
                        on_committed.call((service_id, new_status));
                        toast.success(
                            format!("Status updated to {new_status}"),
                            ToastOptions::new(),
                        );
                    }
                    Err(_) => {
                        toast.error("Failed to update status".to_string(), ToastOptions::new());
                    }
                }
                in_flight.set(false);
            });
        }
    };
    let mut confirmed_update = do_update.clone();

    let mut handle_select = move |value: String| {
        let Some(new_status) = RequestStatus::ALL.into_iter().find(|s| s.as_str() == value)
        else {
            return;
        };
        if current_status.is_terminal() {
            toast.warning(TERMINAL_STATUS_MESSAGE.to_string(), ToastOptions::new());
            return;
        }
        if *in_flight.read() || new_status == current_status {
            return;
        }
        if new_status.is_terminal() {
            confirming.set(Some(new_status));
            return;
        }
        do_update(new_status);
    };

    let quote_target = request.clone();
    let send_quote = move |_| {
        let url = quote_mailto_url(&quote_target);
        navigator().push(NavigationTarget::<Route>::External(url));
    };

    let confirming_label = confirming().map(|s| s.as_str()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./request_card.css") }

        div {
            class: "request-card",
            "data-status": current_status.as_str(),
            "data-emergency": request.is_emergency,

            Card {
                CardHeader {
                    div { class: "request-card-head",
                        div { class: "request-card-customer",
                            CardTitle {
                                Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                                "{request.customer_name}"
                            }
                            if request.is_emergency {
                                Badge { variant: BadgeVariant::Destructive,
                                    Icon::<LdZap> { icon: LdZap, width: 12, height: 12 }
                                    "EMERGENCY"
                                }
                            }
                        }
                        Badge { variant: status_badge_variant(current_status),
                            "{current_status}"
                        }
                    }
                }

                CardContent {
                    div { class: "request-card-meta",
                        div { class: "request-card-meta-row",
                            span { class: "request-card-meta-label", "Service:" }
                            span { "{request.service_type}" }
                        }
                        div { class: "request-card-meta-row",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                            span { class: "request-card-meta-label", "Requested:" }
                            span { {format_requested_at(&request.requested_at)} }
                        }
                        if let Some(technician) = request.technician.as_ref() {
                            div { class: "request-card-meta-row",
                                span { class: "request-card-meta-label", "Technician:" }
                                span { "{technician}" }
                            }
                        }
                    }

                    div { class: "request-card-description",
                        h4 { "Description" }
                        p { "{request.description}" }
                    }

                    div { class: "request-card-contact",
                        h4 { "Customer Contact" }
                        div { class: "request-card-contact-row",
                            Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                            a { href: "mailto:{request.customer_email}", "{request.customer_email}" }
                        }
                        div { class: "request-card-contact-row",
                            Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 }
                            a { href: "tel:{request.customer_phone}", "{request.customer_phone}" }
                        }
                    }

                    div { class: "request-card-actions",
                        FormSelect {
                            label: "Update Status",
                            value: current_status.as_str().to_string(),
                            disabled: in_flight(),
                            onchange: move |e: FormEvent| handle_select(e.value()),
                            for status in RequestStatus::ALL {
                                option { value: status.as_str(), "{status}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: in_flight(),
                            onclick: send_quote,
                            Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                            "Send Quote"
                        }
                    }
                }
            }
        }

        AlertDialogRoot {
            open: confirming.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    confirming.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Confirm status change to \"{confirming_label}\"?" }
                AlertDialogDescription {
                    "This action cannot be undone. The request status will be permanently changed to {confirming_label}."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| {
                            if let Some(target) = confirming() {
                                confirming.set(None);
                                confirmed_update(target);
                            }
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
