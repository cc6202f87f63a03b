use super::{BUTTON_CLASS, Card, INPUT_CLASS, bind_input, error_banner, request_error};
use crate::auth::{get_user_friendly_error, use_auth};
use crate::routes::Route;
use talenthub_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const MIN_PASSWORD_LEN: usize = 8;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let confirmation = use_state(|| None::<String>);

    let on_submit = {
        let ctx = auth.context();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let request = RegisterRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            };
            if request.email.is_empty() || request.first_name.is_empty() {
                error.set(Some("Please fill in your name and email.".to_string()));
                return;
            }
            if request.password.len() < MIN_PASSWORD_LEN {
                error.set(Some(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters."
                )));
                return;
            }

            is_submitting.set(true);
            error.set(None);
            let ctx = ctx.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let confirmation = confirmation.clone();
            spawn_local(async move {
                match ctx.api().register(request).await {
                    Ok(_) => {
                        tracing::info!("Account registered");
                        confirmation.set(Some(
                            "Account created. Check your inbox to verify your email.".to_string(),
                        ));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Registration failed");
                        error.set(Some(get_user_friendly_error(&request_error(e))));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    if let Some(message) = &*confirmation {
        return html! {
            <Card title="Check your email">
                <p class="text-gray-600 mb-6 text-center">{message}</p>
                <Link<Route> to={Route::Login} classes={classes!("block", "text-center", "text-blue-600", "hover:underline")}>
                    {"Back to sign in"}
                </Link<Route>>
            </Card>
        };
    }

    html! {
        <Card title="Create your account">
            {error_banner((*error).as_ref())}
            <form onsubmit={on_submit} class="space-y-4">
                <div class="flex gap-3">
                    <input
                        type="text"
                        class={INPUT_CLASS}
                        placeholder="First name"
                        value={(*first_name).clone()}
                        oninput={bind_input(&first_name)}
                    />
                    <input
                        type="text"
                        class={INPUT_CLASS}
                        placeholder="Last name"
                        value={(*last_name).clone()}
                        oninput={bind_input(&last_name)}
                    />
                </div>
                <input
                    type="email"
                    class={INPUT_CLASS}
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <input
                    type="password"
                    class={INPUT_CLASS}
                    placeholder="Password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <button type="submit" class={BUTTON_CLASS} disabled={*is_submitting}>
                    {"Create account"}
                </button>
            </form>
            <p class="mt-6 text-sm text-center">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes={classes!("text-blue-600", "hover:underline")}>
                    {"Sign in"}
                </Link<Route>>
            </p>
        </Card>
    }
}
