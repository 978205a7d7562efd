pub mod request_card;
pub mod service_request_modal;
pub mod theme_toggle;

pub use request_card::RequestCard;
pub use service_request_modal::ServiceRequestModal;
pub use theme_toggle::ThemeToggle;
