//! TalentHub HTTP client
//!
//! Typed access to the backend auth endpoints. [`TalentHubClient`] also
//! implements [`talenthub_core::AuthApi`] so it can back an auth context
//! directly.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{TalentHubClient, TalentHubClientBuilder};
