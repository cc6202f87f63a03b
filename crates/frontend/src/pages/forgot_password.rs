use super::{BUTTON_CLASS, Card, INPUT_CLASS, bind_input, error_banner, request_error};
use crate::auth::{get_user_friendly_error, use_auth};
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let is_sent = use_state(|| false);

    let on_submit = {
        let ctx = auth.context();
        let email = email.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let is_sent = is_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() || *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);
            let ctx = ctx.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let is_sent = is_sent.clone();
            spawn_local(async move {
                match ctx.api().forgot_password(&address).await {
                    Ok(_) => is_sent.set(true),
                    Err(e) => {
                        tracing::warn!(error = %e, "Password reset request failed");
                        error.set(Some(get_user_friendly_error(&request_error(e))));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    if *is_sent {
        return html! {
            <Card title="Check your email">
                <p class="text-gray-600 mb-6 text-center">
                    {"If an account exists for that address, a reset link is on its way."}
                </p>
                <Link<Route> to={Route::Login} classes={classes!("block", "text-center", "text-blue-600", "hover:underline")}>
                    {"Back to sign in"}
                </Link<Route>>
            </Card>
        };
    }

    html! {
        <Card title="Reset your password">
            {error_banner((*error).as_ref())}
            <form onsubmit={on_submit} class="space-y-4">
                <input
                    type="email"
                    class={INPUT_CLASS}
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <button type="submit" class={BUTTON_CLASS} disabled={*is_submitting}>
                    {"Send reset link"}
                </button>
            </form>
        </Card>
    }
}
