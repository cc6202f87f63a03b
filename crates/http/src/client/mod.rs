//! TalentHub HTTP client

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// TalentHub API client
#[derive(Clone, Debug)]
pub struct TalentHubClient {
    client: Client,
    base_url: String,
}

impl TalentHubClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> TalentHubClientBuilder {
        TalentHubClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for `path`
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "API request");
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose body is irrelevant
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .await
                .map_or_else(|_| status.to_string(), |body| error_message(&body, status));
            tracing::warn!(status = status.as_u16(), error = %message, "API request failed");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Pull a readable message out of an error body: `{"message": ..}` or
/// `{"error": ..}` when JSON, else the raw text
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if body.trim().is_empty() {
        return status.to_string();
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Builder for TalentHubClient
#[derive(Default)]
pub struct TalentHubClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TalentHubClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TalentHubClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder.user_agent(
                self.user_agent
                    .unwrap_or_else(|| concat!("talenthub-client/", env!("CARGO_PKG_VERSION")).to_string()),
            );
        }

        let client = client_builder.build()?;

        Ok(TalentHubClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#, status),
            "Invalid credentials"
        );
        assert_eq!(error_message(r#"{"error":"Token expired"}"#, status), "Token expired");
        assert_eq!(error_message("plain text", status), "plain text");
        assert_eq!(error_message("", status), "401 Unauthorized");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = TalentHubClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
