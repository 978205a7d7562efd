pub mod error;
pub mod feature_flags;
pub mod requests;
pub mod service_request;

pub use error::*;
pub use feature_flags::*;
pub use requests::*;
pub use service_request::*;
