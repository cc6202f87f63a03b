//! Seam to the backend authentication endpoints

use crate::error::ApiError;
use crate::types::{LoginResponse, TokenPair};
use async_trait::async_trait;

/// Backend auth endpoints the session lifecycle depends on.
///
/// Futures are `Send` natively; in the browser they run on the single
/// wasm thread and are not.
#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AuthApi {
    /// `POST /auth/login`
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `GET /auth/ping` with a bearer token; doubles as keep-alive
    async fn ping(&self, access_token: &str) -> Result<(), ApiError>;

    /// `POST /auth/refresh`
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;
}
