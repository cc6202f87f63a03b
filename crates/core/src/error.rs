//! Error taxonomy for the session lifecycle
//!
//! Every variant is handled locally by the caller: it ends in an inline
//! message, a redirect, or a log line. Nothing here is meant to bubble up as
//! an unhandled fault.

use crate::types::Role;

/// Standard result type for auth operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors produced by the auth context and route guard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Bad credentials; shown inline, session untouched
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Stale or invalid persisted tokens; the session store has been cleared
    #[error("Session restoration failed: {message}")]
    SessionRestorationFailed { message: String },

    /// Keep-alive call failed; logged only
    #[error("Keep-alive failed: {message}")]
    KeepAliveFailed { message: String },

    /// Authenticated, but the role may not open the requested page
    #[error(
        "{} accounts cannot open that page. You have been returned to your dashboard.",
        .role.display_name()
    )]
    AuthorizationDenied { role: Role, path: String },

    /// Missing or expired token on a token-bearing page
    #[error("Invalid or missing token")]
    InvalidToken,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Create an authentication failure
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
        }
    }

    /// Create a restoration failure
    pub fn restoration_failed(message: impl Into<String>) -> Self {
        Self::SessionRestorationFailed {
            message: message.into(),
        }
    }

    /// Create a keep-alive failure
    pub fn keep_alive_failed(message: impl Into<String>) -> Self {
        Self::KeepAliveFailed {
            message: message.into(),
        }
    }
}

/// Transport-neutral errors returned by [`crate::AuthApi`] implementations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credentials or token (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend refused the credentials or token
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Errors from the durable key-value storage behind the session store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed for key {key}: {message}")]
    Write { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
