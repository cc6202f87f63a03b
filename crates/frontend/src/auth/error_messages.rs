//! User-friendly error message mappings

use talenthub_core::{ApiError, AuthError};

/// Convert technical errors to user-friendly messages
pub fn get_user_friendly_error(error: &AuthError) -> String {
    match error {
        AuthError::AuthenticationFailed { message } if !message.trim().is_empty() => {
            message.clone()
        }
        AuthError::AuthenticationFailed { .. } => {
            "Invalid email or password. Please try again.".to_string()
        }
        AuthError::SessionRestorationFailed { .. } | AuthError::NotAuthenticated => {
            "Your session has expired. Please sign in again.".to_string()
        }
        AuthError::KeepAliveFailed { .. } => {
            "We could not extend your session. Please save your work.".to_string()
        }
        AuthError::AuthorizationDenied { .. } => {
            "You don't have permission to access this page.".to_string()
        }
        AuthError::InvalidToken => {
            "This link is invalid or has expired. Please request a new one.".to_string()
        }
        AuthError::Api(api) => api_message(api),
        AuthError::Storage(_) => {
            "Your browser blocked local storage. Enable it to stay signed in.".to_string()
        }
    }
}

fn api_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => {
            "Connection error. Please check your internet connection and try again.".to_string()
        }
        ApiError::Unauthorized(_) => "Your session has expired. Please sign in again.".to_string(),
        ApiError::Status { status, message } if (400..500).contains(status) && !message.is_empty() => {
            message.clone()
        }
        ApiError::Status { status, .. } if *status >= 500 => {
            "Something went wrong on our end. Please try again later.".to_string()
        }
        ApiError::Status { .. } | ApiError::Decode(_) => {
            "An unexpected error occurred. Please try again.".to_string()
        }
    }
}
