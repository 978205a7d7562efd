pub mod admin;
pub mod admin_login;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use admin::Admin;
use admin_login::AdminLogin;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/admin-login")]
    AdminLogin {},
    #[layout(AdminGuard)]
    #[route("/admin")]
    Admin {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Admin guard layout. Redirects to /admin-login if no valid session.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML. During
/// hydration the embedded data is available immediately. A `SuspenseBoundary`
/// in `App` catches the suspension and shows a loading state.
///
/// The session middleware already bounces unauthenticated page loads of
/// `/admin` with a 307; this guard covers client-side navigation, where no
/// full page request reaches the middleware.
#[component]
fn AdminGuard() -> Element {
    let resource = use_server_future(move || async move { server::api::current_admin().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(_username))) => {
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            navigator().push(Route::AdminLogin {});
            rsx! {
                div { class: "route-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "route-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}
