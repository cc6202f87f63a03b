use super::{BUTTON_CLASS, Card, INPUT_CLASS, bind_input, error_banner, token_error, use_link_token};
use crate::auth::{get_user_friendly_error, use_auth};
use crate::components::{InvalidToken, TokenPurpose};
use crate::routes::Route;
use talenthub_core::AuthError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const MIN_PASSWORD_LEN: usize = 8;

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    match use_link_token() {
        Some(token) => html! { <ResetPasswordForm {token} /> },
        None => html! { <InvalidToken purpose={TokenPurpose::PasswordReset} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ResetPasswordFormProps {
    token: String,
}

#[derive(Clone, PartialEq)]
enum ResetState {
    Editing,
    Submitting,
    Done,
    TokenRejected,
}

#[function_component(ResetPasswordForm)]
fn reset_password_form(props: &ResetPasswordFormProps) -> Html {
    let auth = use_auth();
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let state = use_state(|| ResetState::Editing);

    let on_submit = {
        let ctx = auth.context();
        let token = props.token.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state != ResetState::Editing {
                return;
            }
            if password.len() < MIN_PASSWORD_LEN {
                error.set(Some(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters."
                )));
                return;
            }
            if *password != *confirm {
                error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            state.set(ResetState::Submitting);
            error.set(None);
            let ctx = ctx.clone();
            let token = token.clone();
            let new_password = (*password).clone();
            let error = error.clone();
            let state = state.clone();
            spawn_local(async move {
                match ctx.api().reset_password(&token, &new_password).await {
                    Ok(_) => {
                        tracing::info!("Password reset");
                        state.set(ResetState::Done);
                    }
                    Err(e) => match token_error(e) {
                        AuthError::InvalidToken => state.set(ResetState::TokenRejected),
                        other => {
                            error.set(Some(get_user_friendly_error(&other)));
                            state.set(ResetState::Editing);
                        }
                    },
                }
            });
        })
    };

    match *state {
        ResetState::TokenRejected => {
            html! { <InvalidToken purpose={TokenPurpose::PasswordReset} /> }
        }
        ResetState::Done => html! {
            <Card title="Password updated">
                <p class="text-gray-600 mb-6 text-center">
                    {"Your password has been changed. You can now sign in."}
                </p>
                <Link<Route> to={Route::Login} classes={classes!("block", "text-center", "text-blue-600", "hover:underline")}>
                    {"Sign in"}
                </Link<Route>>
            </Card>
        },
        ResetState::Editing | ResetState::Submitting => html! {
            <Card title="Choose a new password">
                {error_banner((*error).as_ref())}
                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        type="password"
                        class={INPUT_CLASS}
                        placeholder="New password"
                        autocomplete="new-password"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    <input
                        type="password"
                        class={INPUT_CLASS}
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        value={(*confirm).clone()}
                        oninput={bind_input(&confirm)}
                    />
                    <button type="submit" class={BUTTON_CLASS} disabled={*state == ResetState::Submitting}>
                        {"Update password"}
                    </button>
                </form>
            </Card>
        },
    }
}
