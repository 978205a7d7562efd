// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod dialog;
pub mod label;
pub mod toast;

// Re-exports for convenience
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
