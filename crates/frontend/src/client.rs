//! Client configuration and initialization

use talenthub_http::{ClientError, TalentHubClient};
use web_sys::window;

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Build the backend client for the current origin
pub fn create_client() -> Result<TalentHubClient, ClientError> {
    TalentHubClient::builder().base_url(get_base_url()).build()
}
