//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Expiry warning tick in milliseconds
    pub const EXPIRY_TICK_MS: u32 = 1_000;

    /// How long a route notice stays on screen
    pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

    /// DOM events that count as user activity
    pub const ACTIVITY_EVENTS: [&'static str; 3] = ["click", "keydown", "touchstart"];

    /// Marker attribute on the expiry prompt; interaction inside it is not activity
    pub const WARNING_MARKER: &'static str = "data-session-warning";
}
