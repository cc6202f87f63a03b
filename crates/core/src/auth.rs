//! Auth context: the single owner of client-side session state
//!
//! State machine: `Loading -> {Authenticated, Unauthenticated}`, then
//! `Authenticated <-> Unauthenticated` through login, logout, expiry and
//! restoration. Nothing returns to `Loading`.
//!
//! The context is built once and handed down explicitly; observers follow
//! it through [`AuthContext::subscribe`].

use crate::api::AuthApi;
use crate::clock::{Clock, SystemClock};
use crate::config::{InvalidConfig, SessionConfig};
use crate::error::{ApiError, AuthError, AuthResult};
use crate::expiry::{ExpiryPolicy, ExpiryStatus};
use crate::routes::{self, GuardAuth, GuardDecision, RoutePolicy};
use crate::store::{KeyValueStorage, SessionStore};
use crate::types::{Role, Session, UserRecord};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
const RESTORE_FAILED_MESSAGE: &str = "We could not restore your session. Please sign in again.";

/// Coarse authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Published auth state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub status: AuthStatus,
    pub user: Option<UserRecord>,
    /// Last user-facing error, cleared on the next successful transition
    pub error: Option<String>,
    /// A restoration call is in flight
    pub restoring: bool,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self {
            status: AuthStatus::Loading,
            user: None,
            error: None,
            restoring: false,
        }
    }
}

impl AuthSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading || self.restoring
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Detailed result of a restoration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    Failed,
    /// Another restoration is running; no call was made
    AlreadyInFlight,
    /// Nothing usable in storage
    NoSession,
    /// Stored session idled past its lifetime; no call was made
    Expired,
}

impl RestoreOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Restored)
    }
}

/// Client-side auth state plus the operations that move it
pub struct AuthContext<S, A> {
    store: SessionStore<S>,
    api: A,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
    expiry: ExpiryPolicy,
    policy: RoutePolicy,
    state: watch::Sender<AuthSnapshot>,
    restoring: AtomicBool,
}

/// Clears the in-flight flag even if the restoring future is dropped
struct RestoreGuard<'a, S, A>(&'a AuthContext<S, A>);

impl<S, A> Drop for RestoreGuard<'_, S, A> {
    fn drop(&mut self) {
        self.0.restoring.store(false, Ordering::Release);
        self.0.state.send_if_modified(|state| {
            std::mem::replace(&mut state.restoring, false)
        });
    }
}

impl<S: KeyValueStorage, A: AuthApi> AuthContext<S, A> {
    /// Create a context in the `Loading` state using the wall clock and default timings
    pub fn new(storage: S, api: A) -> Self {
        let config = SessionConfig::default();
        let (state, _) = watch::channel(AuthSnapshot::default());
        Self {
            store: SessionStore::new(storage),
            api,
            clock: Arc::new(SystemClock),
            expiry: ExpiryPolicy::from(&config),
            config,
            policy: RoutePolicy::default(),
            state,
            restoring: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Swap in a different session configuration after validating it
    pub fn with_config(mut self, config: SessionConfig) -> Result<Self, InvalidConfig> {
        config.validate()?;
        self.expiry = ExpiryPolicy::from(&config);
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub const fn expiry_policy(&self) -> &ExpiryPolicy {
        &self.expiry
    }

    pub const fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Current state
    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.borrow().clone()
    }

    /// Follow state changes
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }

    /// Page-load entry point: settle `Loading` from whatever is in storage
    pub async fn initialize(&self) -> AuthStatus {
        if self.store.has_tokens() {
            self.try_restore().await;
        } else {
            self.settle_unauthenticated(None);
        }
        self.snapshot().status
    }

    /// Sign in with credentials. On failure the session is untouched.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<UserRecord> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            let err = AuthError::authentication_failed("Email and password are required");
            self.set_error(&err);
            return Err(err);
        }

        match self.api.login(email, password).await {
            Ok(response) => {
                let session = Session::from_login(response, self.now_ms());
                if let Err(e) = self.store.save(&session) {
                    let err = AuthError::from(e);
                    self.set_error(&err);
                    return Err(err);
                }
                tracing::info!(
                    user_id = %session.user.id,
                    role = %session.user.role,
                    "Login succeeded"
                );
                self.settle_authenticated(session.user.clone());
                Ok(session.user)
            }
            Err(e) => {
                let err = match e {
                    ApiError::Unauthorized(message) => AuthError::authentication_failed(message),
                    ApiError::Status {
                        status: 400 | 403,
                        message,
                    } => AuthError::authentication_failed(message),
                    other => AuthError::Api(other),
                };
                tracing::warn!(error = %err, "Login failed");
                self.set_error(&err);
                Err(err)
            }
        }
    }

    /// Validate persisted tokens with the backend. `true` only when the
    /// session is restored; an in-flight restoration also yields `false`.
    pub async fn restore_session(&self) -> bool {
        self.try_restore().await.is_success()
    }

    /// Validate persisted tokens, reporting why when it does not succeed
    pub async fn try_restore(&self) -> RestoreOutcome {
        if self
            .restoring
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Restoration already in flight");
            return RestoreOutcome::AlreadyInFlight;
        }
        let _guard = RestoreGuard(self);
        self.state.send_modify(|state| state.restoring = true);

        let Some(session) = self.store.load() else {
            self.clear_store();
            self.settle_unauthenticated(None);
            return RestoreOutcome::NoSession;
        };

        if self
            .expiry
            .is_expired(self.now_ms(), session.last_activity_ms)
        {
            tracing::info!(user_id = %session.user.id, "Persisted session idled out");
            self.clear_store();
            self.settle_unauthenticated(Some(SESSION_EXPIRED_MESSAGE.to_string()));
            return RestoreOutcome::Expired;
        }

        let pinged_token = session.access_token.clone();
        let result = match self.api.ping(&session.access_token).await {
            Ok(()) => Ok(session),
            Err(e) if e.is_unauthorized() => self
                .api
                .refresh(&session.refresh_token)
                .await
                .map(|tokens| session.with_tokens(tokens)),
            Err(e) => Err(e),
        };

        // storage may have changed while the call was in flight
        match self.store.load() {
            None => {
                self.settle_unauthenticated(None);
                return RestoreOutcome::NoSession;
            }
            Some(current) if current.access_token != pinged_token => {
                tracing::debug!("Session replaced during restoration; keeping the newer one");
                return RestoreOutcome::NoSession;
            }
            Some(_) => {}
        }

        let session = match result {
            Ok(session) => session,
            Err(e) => return self.fail_restore(&e),
        };
        if let Err(e) = self.store.save(&session) {
            tracing::warn!(error = %e, "Failed to persist restored session");
            return self.fail_restore(&e);
        }

        tracing::info!(
            user_id = %session.user.id,
            role = %session.user.role,
            "Session restored"
        );
        self.settle_authenticated(session.user);
        RestoreOutcome::Restored
    }

    /// Clear storage and return to `Unauthenticated`
    pub fn logout(&self) {
        self.clear_store();
        tracing::info!("Logged out");
        self.settle_unauthenticated(None);
    }

    /// Drop an idled-out session
    pub fn expire(&self) {
        self.clear_store();
        if self.snapshot().status != AuthStatus::Unauthenticated {
            tracing::info!("Session expired");
            self.settle_unauthenticated(Some(SESSION_EXPIRED_MESSAGE.to_string()));
        }
    }

    /// Record user interaction. An already idled-out session is expired instead.
    pub fn touch_activity(&self) {
        if self.snapshot().status != AuthStatus::Authenticated {
            return;
        }
        if self.expiry_status().is_none_or(ExpiryStatus::is_expired) {
            self.expire();
            return;
        }
        if let Err(e) = self.store.touch_activity(self.now_ms()) {
            tracing::warn!(error = %e, "Failed to record activity");
        }
    }

    /// Keep-alive behind the "extend" action; resets the idle clock on success
    pub async fn keep_alive(&self) -> AuthResult<()> {
        let Some(session) = self.store.load() else {
            return Err(AuthError::NotAuthenticated);
        };
        match self.api.ping(&session.access_token).await {
            Ok(()) => {
                self.store.touch_activity(self.now_ms())?;
                tracing::debug!("Session extended");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Keep-alive failed");
                Err(AuthError::keep_alive_failed(e.to_string()))
            }
        }
    }

    /// Last recorded activity of the stored session
    pub fn last_activity(&self) -> Option<i64> {
        self.store.last_activity()
    }

    /// Idle-expiry status of the stored session
    pub fn expiry_status(&self) -> Option<ExpiryStatus> {
        self.last_activity()
            .map(|last| self.expiry.status(self.now_ms(), last))
    }

    /// Decide a navigation to `path`.
    ///
    /// Redirects to login remember `path`; an idled-out session counts as
    /// signed out. Restoration is left to the caller on `Restoring`.
    pub fn guard(&self, path: &str) -> GuardDecision {
        let snapshot = self.snapshot();
        let mut auth = match (snapshot.status, snapshot.role()) {
            (AuthStatus::Authenticated, Some(role)) => GuardAuth::Authenticated(role),
            (AuthStatus::Loading, _) => GuardAuth::Loading,
            _ => GuardAuth::Unauthenticated,
        };
        if matches!(auth, GuardAuth::Authenticated(_))
            && self.expiry_status().is_none_or(ExpiryStatus::is_expired)
        {
            self.expire();
            auth = GuardAuth::Unauthenticated;
        }

        let access = self.policy.access_for(path);
        let decision = routes::decide(auth, self.store.has_tokens(), &access, path);
        match &decision {
            GuardDecision::RedirectToLogin { return_to } => {
                tracing::debug!(path, "Redirecting to login");
                if let Err(e) = self.store.remember_redirect(return_to) {
                    tracing::warn!(error = %e, "Failed to remember post-login redirect");
                }
            }
            GuardDecision::RedirectToDashboard { target, .. } => {
                tracing::debug!(path, target, "Role not permitted, redirecting to own dashboard");
            }
            GuardDecision::Render | GuardDecision::Restoring => {}
        }
        decision
    }

    /// Where to go after sign-in; consumes the remembered path
    pub fn post_login_target(&self, role: Role) -> String {
        let remembered = self.store.take_redirect();
        self.policy.post_login_target(role, remembered.as_deref())
    }

    fn fail_restore(&self, error: &dyn std::fmt::Display) -> RestoreOutcome {
        let error = AuthError::restoration_failed(error.to_string());
        tracing::warn!(error = %error, "Session restoration failed");
        self.clear_store();
        self.settle_unauthenticated(Some(RESTORE_FAILED_MESSAGE.to_string()));
        RestoreOutcome::Failed
    }

    fn clear_store(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear session storage");
        }
    }

    fn set_error(&self, error: &AuthError) {
        let message = error.to_string();
        self.state.send_modify(|state| state.error = Some(message));
    }

    fn settle_authenticated(&self, user: UserRecord) {
        self.state.send_modify(|state| {
            state.status = AuthStatus::Authenticated;
            state.user = Some(user);
            state.error = None;
        });
    }

    fn settle_unauthenticated(&self, error: Option<String>) {
        self.state.send_modify(|state| {
            state.status = AuthStatus::Unauthenticated;
            state.user = None;
            state.error = error;
        });
    }
}
