use super::{BUTTON_CLASS, Card, INPUT_CLASS, bind_input, error_banner};
use crate::auth::{get_user_friendly_error, use_auth};
use crate::routes::Route;
use talenthub_core::{AuthError, UserRecord};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_done = {
        let ctx = auth.context();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |result: Result<UserRecord, AuthError>| match result {
            Ok(user) => {
                let target = ctx.post_login_target(user.role);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::from_path(&target));
                }
            }
            Err(e) => {
                error.set(Some(get_user_friendly_error(&e)));
                is_submitting.set(false);
            }
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);
            auth.login((*email).clone(), (*password).clone(), on_done.clone());
        })
    };

    // Already signed in, e.g. back-button onto /login
    if !*is_submitting && auth.is_authenticated() {
        if let Some(role) = auth.role() {
            return html! { <Redirect<Route> to={Route::dashboard(role)} /> };
        }
    }

    // A form error wins over the session message (expired, restore failed)
    let message = (*error).as_ref().or(auth.error.as_ref());

    html! {
        <Card title="Sign in to TalentHub">
            {error_banner(message)}
            <form onsubmit={on_submit} class="space-y-4">
                <input
                    type="email"
                    class={INPUT_CLASS}
                    placeholder="Email"
                    autocomplete="username"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <input
                    type="password"
                    class={INPUT_CLASS}
                    placeholder="Password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <button type="submit" class={BUTTON_CLASS} disabled={*is_submitting}>
                    if *is_submitting {
                        {"Signing in..."}
                    } else {
                        {"Sign in"}
                    }
                </button>
            </form>
            <div class="mt-6 flex justify-between text-sm">
                <Link<Route> to={Route::ForgotPassword} classes={classes!("text-blue-600", "hover:underline")}>
                    {"Forgot password?"}
                </Link<Route>>
                <Link<Route> to={Route::Register} classes={classes!("text-blue-600", "hover:underline")}>
                    {"Create an account"}
                </Link<Route>>
            </div>
        </Card>
    }
}
