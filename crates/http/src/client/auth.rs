//! Authentication API client methods

use super::{ClientError, TalentHubClient};
use crate::types::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RefreshRequest,
    RegisterRequest, ResetPasswordRequest, TokenPair, VerifyEmailRequest,
};
use async_trait::async_trait;
use reqwest::Method;
use talenthub_core::{ApiError, AuthApi};

impl TalentHubClient {
    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.execute(request).await
    }

    /// Check a bearer token is still accepted; also keeps the session alive
    pub async fn ping(&self, access_token: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::GET, "/auth/ping")
            .bearer_auth(access_token);
        self.execute_unit(request).await
    }

    /// Trade a refresh token for a new token pair
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ClientError> {
        let request = self
            .request(Method::POST, "/auth/refresh")
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            });
        self.execute(request).await
    }

    /// Create a candidate account
    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/register").json(&request);
        self.execute(request).await
    }

    /// Ask for a password reset link
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ClientError> {
        let request = self
            .request(Method::POST, "/auth/forgot-password")
            .json(&ForgotPasswordRequest {
                email: email.to_string(),
            });
        self.execute(request).await
    }

    /// Set a new password with the token from the reset link
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<MessageResponse, ClientError> {
        let request = self
            .request(Method::POST, "/auth/reset-password")
            .json(&ResetPasswordRequest {
                token: token.to_string(),
                password: password.to_string(),
            });
        self.execute(request).await
    }

    /// Confirm an email address with the token from the verification link
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ClientError> {
        let request = self
            .request(Method::POST, "/auth/verify-email")
            .json(&VerifyEmailRequest {
                token: token.to_string(),
            });
        self.execute(request).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AuthApi for TalentHubClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        Ok(Self::login(self, email, password).await?)
    }

    async fn ping(&self, access_token: &str) -> Result<(), ApiError> {
        Ok(Self::ping(self, access_token).await?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        Ok(Self::refresh(self, refresh_token).await?)
    }
}
