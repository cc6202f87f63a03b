//! Idle-expiry countdown prompt

use crate::auth::use_auth;
use crate::config::AuthConfig;
use gloo::timers::callback::Interval;
use talenthub_core::{ExpiryWarning, WarningView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Counts down the last minutes of an idle session and offers to extend it.
///
/// The interval lives only while the user is signed in; it is dropped on
/// sign-out and on unmount.
#[function_component(SessionExpiryWarning)]
pub fn session_expiry_warning() -> Html {
    let auth = use_auth();
    let view = use_state_eq(|| WarningView::HIDDEN);
    let warning = use_mut_ref(|| ExpiryWarning::new(*auth.context().expiry_policy()));
    let is_extending = use_state(|| false);

    {
        let ctx = auth.context();
        let view = view.clone();
        let warning = warning.clone();
        use_effect_with(auth.is_authenticated(), move |&authenticated| {
            if !authenticated {
                view.set(WarningView::HIDDEN);
            }
            let interval = authenticated.then(|| {
                Interval::new(AuthConfig::EXPIRY_TICK_MS, move || {
                    let Some(last_activity) = ctx.last_activity() else {
                        view.set(WarningView::HIDDEN);
                        return;
                    };
                    let next = warning.borrow_mut().tick(ctx.now_ms(), last_activity);
                    if next.status.is_expired() {
                        ctx.expire();
                    }
                    view.set(next);
                })
            });
            move || drop(interval)
        });
    }

    let on_extend = {
        let ctx = auth.context();
        let view = view.clone();
        let warning = warning.clone();
        let is_extending = is_extending.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_extending.set(true);
            let ctx = ctx.clone();
            let view = view.clone();
            let warning = warning.clone();
            let is_extending = is_extending.clone();
            spawn_local(async move {
                // on failure the prompt stays up; the error is already logged
                if ctx.keep_alive().await.is_ok() {
                    view.set(warning.borrow_mut().extended());
                }
                is_extending.set(false);
            });
        })
    };

    let on_dismiss = {
        let view = view.clone();
        let warning = warning.clone();
        Callback::from(move |_: MouseEvent| {
            warning.borrow_mut().dismiss();
            view.set(WarningView {
                visible: false,
                ..*view
            });
        })
    };

    if !view.visible {
        return html! {};
    }

    html! {
        <div data-session-warning="true" class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div role="alertdialog" class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                <h2 class="text-xl font-bold text-gray-900 mb-4">
                    {"Your session is about to expire"}
                </h2>

                <p class="text-gray-600 mb-6">
                    {"You will be signed out in "}
                    <span class="font-mono font-semibold">{view.countdown()}</span>
                    {" due to inactivity."}
                </p>

                <div class="flex gap-3">
                    <button
                        onclick={on_extend}
                        disabled={*is_extending}
                        class="flex-1 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium py-3 px-4 rounded-lg"
                    >
                        if *is_extending {
                            {"Extending..."}
                        } else {
                            {"Stay signed in"}
                        }
                    </button>
                    <button
                        onclick={on_dismiss}
                        class="flex-1 bg-gray-100 hover:bg-gray-200 text-gray-800 font-medium py-3 px-4 rounded-lg"
                    >
                        {"Dismiss"}
                    </button>
                </div>
            </div>
        </div>
    }
}
