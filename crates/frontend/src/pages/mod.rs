//! Routed pages

mod dashboard;
mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;
mod reset_password;
mod verify_email;

pub use dashboard::AreaPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomeRedirect;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use verify_email::VerifyEmailPage;

use serde::Deserialize;
use talenthub_core::AuthError;
use talenthub_http::ClientError;
use yew::prelude::*;
use yew_router::prelude::*;

/// `?token=` of an emailed link
#[derive(Debug, Default, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Non-blank `token` query parameter of the current location
#[hook]
fn use_link_token() -> Option<String> {
    use_location()
        .and_then(|location| location.query::<TokenQuery>().ok())
        .and_then(|query| query.token)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// A rejected link token gets its own screen; anything else is shown inline
fn token_error(error: ClientError) -> AuthError {
    match error {
        ClientError::BadRequest(_) | ClientError::AuthenticationFailed(_) | ClientError::NotFound(_) => {
            AuthError::InvalidToken
        }
        other => AuthError::Api(other.into()),
    }
}

fn request_error(error: ClientError) -> AuthError {
    AuthError::Api(error.into())
}

/// Keep a text field in `state`
fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500";
const BUTTON_CLASS: &str = "w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium py-3 px-4 rounded-lg";

/// Centered card shared by the account pages
#[derive(Properties, PartialEq)]
struct CardProps {
    title: AttrValue,
    children: Children,
}

#[function_component(Card)]
fn card(props: &CardProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow">
                <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{props.title.clone()}</h1>
                {props.children.clone()}
            </div>
        </div>
    }
}

fn error_banner(error: Option<&String>) -> Html {
    error.map_or_else(
        || html! {},
        |message| {
            html! {
                <div role="alert" class="mb-4 p-3 bg-red-50 text-red-700 rounded text-sm">
                    {message}
                </div>
            }
        },
    )
}
