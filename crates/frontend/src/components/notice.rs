//! Transient notices, e.g. a role redirect

use crate::config::AuthConfig;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Current notice, if any
pub type NoticeContext = UseStateHandle<Option<String>>;

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let notice = use_state_eq(|| None::<String>);

    html! {
        <ContextProvider<NoticeContext> context={notice}>
            {props.children.clone()}
        </ContextProvider<NoticeContext>>
    }
}

#[hook]
pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>()
        .expect("NoticeContext not found. Make sure to wrap your component with NoticeProvider")
}

/// Shows the current notice and clears it after a few seconds
#[function_component(NoticeBanner)]
pub fn notice_banner() -> Html {
    let notice = use_notice();

    {
        let notice = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timeout = current.is_some().then(|| {
                Timeout::new(AuthConfig::NOTICE_TIMEOUT_MS, move || notice.set(None))
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.set(None))
    };

    match &*notice {
        Some(message) => html! {
            <div role="status" class="fixed top-4 inset-x-0 mx-auto max-w-md z-40 p-3 bg-yellow-50 border border-yellow-300 text-yellow-800 rounded-lg shadow flex items-start">
                <p class="flex-1 text-sm">{message}</p>
                <button class="ml-3 text-yellow-700 hover:text-yellow-900" onclick={on_close}>
                    {"×"}
                </button>
            </div>
        },
        None => html! {},
    }
}
