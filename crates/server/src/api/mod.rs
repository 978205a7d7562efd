#[cfg(feature = "server")]
pub(crate) mod auth;

mod admin;
pub use admin::*;

mod service_requests;
pub use service_requests::*;
