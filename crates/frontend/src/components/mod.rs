//! Reusable UI components

mod expiry_warning;
mod invalid_token;
mod notice;
mod route_guard;
mod spinner;

pub use expiry_warning::SessionExpiryWarning;
pub use invalid_token::{InvalidToken, TokenPurpose};
pub use notice::{NoticeBanner, NoticeProvider, use_notice};
pub use route_guard::RouteGuard;
pub use spinner::LoadingSpinner;
