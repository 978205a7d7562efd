use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

use crate::routes::Route;

/// Admin login page. On success the browser carries the session cookie and
/// lands on the dashboard.
#[component]
pub fn AdminLogin() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::admin_login(username(), password()).await {
            Ok(true) => {
                navigator().push(Route::Admin {});
            }
            Ok(false) => {
                error_msg.set(Some("Invalid username or password".to_string()));
            }
            Err(e) => {
                error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Admin Login" }
                    CardDescription { "Sign in to manage service requests" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "Username",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
