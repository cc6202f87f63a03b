//! Auth provider: exposes the session lifecycle to components

use crate::config::AuthConfig;
use crate::storage::BrowserStorage;
use gloo::events::EventListener;
use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;
use talenthub_core::{AuthContext, AuthError, AuthSnapshot, UserRecord};
use talenthub_http::TalentHubClient;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// The auth context the browser app runs on
pub type FrontendAuth = AuthContext<BrowserStorage, TalentHubClient>;

/// Handle given to components: the shared context plus the snapshot
/// the current render was made from
#[derive(Clone)]
pub struct AuthHandle {
    auth: Rc<FrontendAuth>,
    snapshot: AuthSnapshot,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth) && self.snapshot == other.snapshot
    }
}

impl Deref for AuthHandle {
    type Target = AuthSnapshot;

    fn deref(&self) -> &Self::Target {
        &self.snapshot
    }
}

impl AuthHandle {
    pub fn context(&self) -> Rc<FrontendAuth> {
        self.auth.clone()
    }

    /// Sign in; `on_done` receives the user or the inline error
    pub fn login(
        &self,
        email: String,
        password: String,
        on_done: Callback<Result<UserRecord, AuthError>>,
    ) {
        let auth = self.auth.clone();
        spawn_local(async move {
            on_done.emit(auth.login(&email, &password).await);
        });
    }

    pub fn logout(&self) {
        self.auth.logout();
    }

    /// Kick off restoration; concurrent calls collapse into one request
    pub fn restore(&self) {
        let auth = self.auth.clone();
        spawn_local(async move {
            let outcome = auth.try_restore().await;
            tracing::debug!(?outcome, "Restore finished");
        });
    }
}

/// Auth provider props
#[derive(Properties)]
pub struct AuthProviderProps {
    pub auth: Rc<FrontendAuth>,
    pub children: Children,
}

impl PartialEq for AuthProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth) && self.children == other.children
    }
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let snapshot = use_state_eq(|| props.auth.snapshot());

    // Follow context state and settle `Loading` from storage on mount
    {
        let auth = props.auth.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let mut changes = auth.subscribe();
            snapshot.set(changes.borrow_and_update().clone());
            {
                let alive = alive.clone();
                spawn_local(async move {
                    while changes.changed().await.is_ok() {
                        if !alive.get() {
                            break;
                        }
                        let next = changes.borrow_and_update().clone();
                        snapshot.set(next);
                    }
                });
            }
            spawn_local(async move {
                let status = auth.initialize().await;
                tracing::debug!(?status, "Auth initialized");
            });

            move || alive.set(false)
        });
    }

    // Any interaction outside the expiry prompt counts as activity
    {
        let auth = props.auth.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();
            let selector = format!("[{}]", AuthConfig::WARNING_MARKER);
            let listeners: Vec<EventListener> = AuthConfig::ACTIVITY_EVENTS
                .iter()
                .map(|&event| {
                    let auth = auth.clone();
                    let selector = selector.clone();
                    EventListener::new(&document, event, move |e| {
                        if !inside(e, &selector) {
                            auth.touch_activity();
                        }
                    })
                })
                .collect();

            move || drop(listeners)
        });
    }

    let handle = AuthHandle {
        auth: props.auth.clone(),
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

fn inside(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
        .expect("AuthHandle not found. Make sure to wrap your component with AuthProvider")
}
