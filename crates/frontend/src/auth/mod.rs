pub mod context;
pub mod error_messages;

pub use context::{AuthProvider, FrontendAuth, use_auth};
pub use error_messages::get_user_friendly_error;
