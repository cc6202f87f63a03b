//! Dead-end screen for missing or expired email links

use crate::auth::get_user_friendly_error;
use crate::routes::Route;
use talenthub_core::AuthError;
use yew::prelude::*;
use yew_router::prelude::*;

/// Which link the token came from; decides the recovery action
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenPurpose {
    PasswordReset,
    EmailVerification,
}

#[derive(Properties, PartialEq)]
pub struct InvalidTokenProps {
    pub purpose: TokenPurpose,
}

#[function_component(InvalidToken)]
pub fn invalid_token(props: &InvalidTokenProps) -> Html {
    let (title, action, target) = match props.purpose {
        TokenPurpose::PasswordReset => (
            "Reset link invalid",
            "Request a new link",
            Route::ForgotPassword,
        ),
        TokenPurpose::EmailVerification => {
            ("Verification link invalid", "Back to sign in", Route::Login)
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow text-center">
                <h2 class="text-xl font-bold text-gray-900 mb-2">{title}</h2>
                <p class="text-gray-600 mb-6">
                    {get_user_friendly_error(&AuthError::InvalidToken)}
                </p>
                <Link<Route> to={target} classes={classes!("inline-block", "bg-blue-600", "hover:bg-blue-700", "text-white", "font-medium", "py-2", "px-4", "rounded-lg")}>
                    {action}
                </Link<Route>>
            </div>
        </div>
    }
}
