use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod components;
mod helpers;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_environment();
        server::config::load_feature_flags();
        server::health::record_start_time();

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router())
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    use_context_provider(|| shared_ui::theme::ThemeState {
        is_dark: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "route-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
