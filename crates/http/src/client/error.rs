//! Client error types

use talenthub_core::ApiError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Credentials or token rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the backend refused the credentials or token
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::AuthenticationFailed(message) => Self::Unauthorized(message),
            ClientError::BadRequest(message) => Self::Status {
                status: 400,
                message,
            },
            ClientError::Forbidden(message) => Self::Status {
                status: 403,
                message,
            },
            ClientError::NotFound(message) => Self::Status {
                status: 404,
                message,
            },
            ClientError::ServerError { status, message } => Self::Status { status, message },
            ClientError::Request(e) if e.is_decode() => Self::Decode(e.to_string()),
            ClientError::Request(e) => Self::Network(e.to_string()),
            ClientError::Serialization(e) => Self::Decode(e.to_string()),
            ClientError::Configuration(message) => Self::Network(message),
        }
    }
}
