//! Native expiry monitor task
//!
//! Ticks every `check_interval`, publishes the warning view, and expires the
//! session once its idle lifetime is spent. The task ends when cancelled,
//! when the handle is dropped, or when the user is no longer authenticated.

use crate::api::AuthApi;
use crate::auth::{AuthContext, AuthStatus};
use crate::error::AuthResult;
use crate::expiry::{ExpiryStatus, ExpiryWarning, WarningView};
use crate::store::KeyValueStorage;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a running expiry monitor
pub struct ExpiryMonitor<S, A> {
    ctx: Arc<AuthContext<S, A>>,
    warning: Arc<Mutex<ExpiryWarning>>,
    view_tx: watch::Sender<WarningView>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl<S, A> ExpiryMonitor<S, A>
where
    S: KeyValueStorage + Send + Sync + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    /// Start monitoring `ctx` on the current tokio runtime
    pub fn spawn(ctx: Arc<AuthContext<S, A>>) -> Self {
        let warning = Arc::new(Mutex::new(ExpiryWarning::new(*ctx.expiry_policy())));
        let (view_tx, _) = watch::channel(WarningView::HIDDEN);
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(run(
            ctx.clone(),
            warning.clone(),
            view_tx.clone(),
            cancel.clone(),
        ));

        Self {
            ctx,
            warning,
            view_tx,
            cancel,
            handle,
        }
    }

    /// Follow the warning prompt
    pub fn views(&self) -> watch::Receiver<WarningView> {
        self.view_tx.subscribe()
    }

    /// Latest published view
    pub fn view(&self) -> WarningView {
        *self.view_tx.borrow()
    }

    /// Hide the prompt; the countdown keeps running
    pub fn dismiss(&self) {
        lock(&self.warning).dismiss();
        self.view_tx.send_modify(|view| view.visible = false);
    }

    /// Call the keep-alive endpoint and reset the prompt on success.
    /// On failure the prompt stays up and the next tick re-evaluates.
    pub async fn extend(&self) -> AuthResult<()> {
        self.ctx.keep_alive().await?;
        let view = lock(&self.warning).extended();
        self.view_tx.send_replace(view);
        Ok(())
    }

    /// Stop the task
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<S, A> Drop for ExpiryMonitor<S, A> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn lock(warning: &Mutex<ExpiryWarning>) -> std::sync::MutexGuard<'_, ExpiryWarning> {
    warning.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run<S, A>(
    ctx: Arc<AuthContext<S, A>>,
    warning: Arc<Mutex<ExpiryWarning>>,
    view_tx: watch::Sender<WarningView>,
    cancel: CancellationToken,
) where
    S: KeyValueStorage + Send + Sync + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    let mut interval = tokio::time::interval(ctx.config().check_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut auth_rx = ctx.subscribe();
    tracing::debug!("Expiry monitor started");

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            changed = auth_rx.changed() => {
                if changed.is_err() || auth_rx.borrow_and_update().status != AuthStatus::Authenticated {
                    break;
                }
            }
            _ = interval.tick() => {
                let Some(last_activity) = ctx.last_activity() else {
                    break;
                };
                let view = lock(&warning).tick(ctx.now_ms(), last_activity);
                view_tx.send_replace(view);
                if view.status == ExpiryStatus::Expired {
                    ctx.expire();
                    break;
                }
            }
        }
    }

    view_tx.send_replace(WarningView::HIDDEN);
    tracing::debug!("Expiry monitor stopped");
}
