use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCheck, LdClock, LdFilter, LdLogOut, LdSearch, LdUsers, LdZap,
};
use dioxus_free_icons::Icon;
use shared_types::{RequestStatus, ServiceRequest};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormSelect, Input, Skeleton, ToastOptions,
};

use crate::components::{RequestCard, ThemeToggle};
use crate::helpers::{distinct_service_types, request_matches, status_counts};
use crate::routes::Route;

/// Admin dashboard: stats, filters, and the request grid.
///
/// The list is fetched once per mount and then owned locally; status
/// commits from cards patch the same list, and Retry refetches.
#[component]
pub fn Admin() -> Element {
    let toast = use_toast();

    let mut data =
        use_resource(move || async move { server::api::list_service_requests().await });

    // Local copy of the list so card commits can update it without refetching
    let mut requests = use_signal(Vec::<ServiceRequest>::new);
    use_effect(move || {
        if let Some(Ok(list)) = data.read().as_ref() {
            requests.set(list.clone());
        }
    });

    let mut service_filter = use_signal(|| "All".to_string());
    let mut status_filter = use_signal(|| Option::<RequestStatus>::None);
    let mut search_term = use_signal(String::new);

    let on_committed = move |(id, status): (String, RequestStatus)| {
        let mut list = requests.write();
        if let Some(entry) = list.iter_mut().find(|r| r.id == id) {
            entry.status = status;
        }
    };

    let handle_logout = move |_| async move {
        match server::api::admin_logout().await {
            Ok(()) => {
                navigator().push(Route::AdminLogin {});
            }
            Err(_) => {
                toast.error("Logout failed".to_string(), ToastOptions::new());
            }
        }
    };

    let list = requests();
    let service_selected = service_filter();
    let status_selected = status_filter();
    let search = search_term();

    let service_arg = (service_selected != "All").then_some(service_selected.as_str());
    let filtered: Vec<ServiceRequest> = list
        .iter()
        .filter(|r| request_matches(r, service_arg, status_selected, &search))
        .cloned()
        .collect();

    let counts = status_counts(&list);
    let total = list.len();
    let emergencies = list.iter().filter(|r| r.is_emergency).count();
    let in_progress = counts
        .iter()
        .find(|(s, _)| *s == RequestStatus::InProgress)
        .map(|(_, n)| *n)
        .unwrap_or(0);
    let completed = counts
        .iter()
        .find(|(s, _)| *s == RequestStatus::Completed)
        .map(|(_, n)| *n)
        .unwrap_or(0);
    let service_types = distinct_service_types(&list);
    let any_filter_active =
        service_selected != "All" || status_selected.is_some() || !search.trim().is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            header { class: "admin-header",
                div {
                    h1 { "Admin Service Dashboard" }
                    p { "Manage and track all electrical service requests" }
                }
                div { class: "admin-header-actions",
                    ThemeToggle {}
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Log Out"
                    }
                }
            }

            match data.read().as_ref() {
                None => rsx! {
                    div { class: "admin-loading",
                        Skeleton { class: "admin-skeleton-stats" }
                        Skeleton { class: "admin-skeleton-grid" }
                        p { "Loading service requests..." }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card { class: "admin-error",
                        CardHeader {
                            CardTitle { "Error Loading Data" }
                            CardDescription {
                                {shared_types::AppError::friendly_message(&e.to_string())}
                            }
                        }
                        CardContent {
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| data.restart(),
                                "Retry"
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div { class: "admin-stats",
                        Card {
                            CardHeader {
                                CardTitle { "Total Requests" }
                                Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                            }
                            CardContent {
                                div { class: "admin-stat-value", "{total}" }
                                p { "Active service requests" }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Emergency" }
                                Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                            }
                            CardContent {
                                div { class: "admin-stat-value admin-stat-emergency", "{emergencies}" }
                                p { "Urgent requests" }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "In Progress" }
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                            }
                            CardContent {
                                div { class: "admin-stat-value", "{in_progress}" }
                                p { "Currently active" }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Completed" }
                                Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                            }
                            CardContent {
                                div { class: "admin-stat-value admin-stat-completed", "{completed}" }
                                p { "Successfully finished" }
                            }
                        }
                    }

                    Card { class: "admin-filters",
                        CardHeader {
                            CardTitle {
                                Icon::<LdFilter> { icon: LdFilter, width: 16, height: 16 }
                                "Filters & Search"
                            }
                        }
                        CardContent {
                            div { class: "admin-search",
                                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                                Input {
                                    placeholder: "Search by customer name, service type, or description...",
                                    value: search_term(),
                                    on_input: move |e: FormEvent| search_term.set(e.value()),
                                }
                            }
                            div { class: "admin-filter-row",
                                FormSelect {
                                    label: "Filter by Status",
                                    value: status_selected.map(|s| s.as_str()).unwrap_or("All").to_string(),
                                    onchange: move |e: FormEvent| {
                                        let value = e.value();
                                        status_filter.set(
                                            RequestStatus::ALL.into_iter().find(|s| s.as_str() == value),
                                        );
                                    },
                                    option { value: "All", "All Statuses ({total})" }
                                    for (status, count) in counts.clone() {
                                        option { value: status.as_str(), "{status} ({count})" }
                                    }
                                }
                                FormSelect {
                                    label: "Filter by Service",
                                    value: service_selected.clone(),
                                    onchange: move |e: FormEvent| service_filter.set(e.value()),
                                    option { value: "All", "All Services" }
                                    for service in service_types.clone() {
                                        option { value: service.clone(), "{service}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "admin-results-bar",
                        div { class: "admin-results-badges",
                            Badge { variant: BadgeVariant::Outline,
                                "{filtered.len()} of {total} requests"
                            }
                            if !search.trim().is_empty() {
                                Badge { variant: BadgeVariant::Secondary, "Search: \"{search}\"" }
                            }
                            if let Some(status) = status_selected {
                                Badge { variant: BadgeVariant::Secondary, "Status: {status}" }
                            }
                            if service_selected != "All" {
                                Badge { variant: BadgeVariant::Secondary, "Service: {service_selected}" }
                            }
                        }
                        if any_filter_active {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    search_term.set(String::new());
                                    status_filter.set(None);
                                    service_filter.set("All".to_string());
                                },
                                "Clear Filters"
                            }
                        }
                    }

                    if filtered.is_empty() {
                        Card { class: "admin-empty",
                            CardContent {
                                Icon::<LdSearch> { icon: LdSearch, width: 40, height: 40 }
                                CardTitle { "No requests found" }
                                CardDescription {
                                    if any_filter_active {
                                        "Try adjusting your filters or search terms"
                                    } else {
                                        "No service requests available at the moment"
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "admin-grid",
                            for request in filtered.clone() {
                                RequestCard {
                                    key: "{request.id}",
                                    request: request.clone(),
                                    on_committed: on_committed,
                                }
                            }
                        }
                    }
                },
            }
        }

        div { class: "admin-brand-footer",
            Icon::<LdZap> { icon: LdZap, width: 16, height: 16 }
            span { "One Way Electric" }
        }
    }
}
