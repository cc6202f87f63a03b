//! TalentHub client session lifecycle: persisted session, auth context,
//! idle-expiry warning and role-gated routing.

pub mod api;
pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod expiry;
#[cfg(not(target_arch = "wasm32"))]
pub mod monitor;
pub mod routes;
pub mod store;
pub mod types;

pub use api::AuthApi;
pub use auth::{AuthContext, AuthSnapshot, AuthStatus, RestoreOutcome};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{InvalidConfig, SessionConfig};
pub use error::{ApiError, AuthError, AuthResult, StorageError};
pub use expiry::{ExpiryPolicy, ExpiryStatus, ExpiryWarning, WarningView};
#[cfg(not(target_arch = "wasm32"))]
pub use monitor::ExpiryMonitor;
pub use routes::{GuardDecision, LOGIN_PATH, RouteAccess, RoutePolicy};
pub use store::{KeyValueStorage, MemoryStorage, SessionStore};
pub use types::{LoginResponse, Role, Session, TokenPair, UserRecord};
