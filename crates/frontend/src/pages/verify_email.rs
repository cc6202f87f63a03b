use super::{Card, token_error, use_link_token};
use crate::auth::{get_user_friendly_error, use_auth};
use crate::components::{InvalidToken, LoadingSpinner, TokenPurpose};
use crate::routes::Route;
use talenthub_core::AuthError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(VerifyEmailPage)]
pub fn verify_email_page() -> Html {
    match use_link_token() {
        Some(token) => html! { <VerifyEmail {token} /> },
        None => html! { <InvalidToken purpose={TokenPurpose::EmailVerification} /> },
    }
}

#[derive(Properties, PartialEq)]
struct VerifyEmailProps {
    token: String,
}

#[derive(Clone, PartialEq)]
enum Verification {
    Pending,
    Verified,
    TokenRejected,
    Failed(String),
}

#[function_component(VerifyEmail)]
fn verify_email(props: &VerifyEmailProps) -> Html {
    let auth = use_auth();
    let verification = use_state(|| Verification::Pending);

    {
        let ctx = auth.context();
        let verification = verification.clone();
        use_effect_with(props.token.clone(), move |token| {
            let token = token.clone();
            spawn_local(async move {
                let next = match ctx.api().verify_email(&token).await {
                    Ok(_) => {
                        tracing::info!("Email verified");
                        Verification::Verified
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Email verification failed");
                        match token_error(e) {
                            AuthError::InvalidToken => Verification::TokenRejected,
                            other => Verification::Failed(get_user_friendly_error(&other)),
                        }
                    }
                };
                verification.set(next);
            });
        });
    }

    match &*verification {
        Verification::Pending => html! {
            <LoadingSpinner text={Some("Verifying your email...".to_string())} />
        },
        Verification::TokenRejected => {
            html! { <InvalidToken purpose={TokenPurpose::EmailVerification} /> }
        }
        Verification::Verified => html! {
            <Card title="Email verified">
                <p class="text-gray-600 mb-6 text-center">{"Thanks! Your email address is confirmed."}</p>
                <Link<Route> to={Route::Login} classes={classes!("block", "text-center", "text-blue-600", "hover:underline")}>
                    {"Sign in"}
                </Link<Route>>
            </Card>
        },
        Verification::Failed(message) => html! {
            <Card title="Verification failed">
                <p class="text-gray-600 mb-6 text-center">{message}</p>
                <Link<Route> to={Route::Login} classes={classes!("block", "text-center", "text-blue-600", "hover:underline")}>
                    {"Back to sign in"}
                </Link<Route>>
            </Card>
        },
    }
}
