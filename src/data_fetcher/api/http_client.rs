//! HTTP client creation and configuration utilities

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::error::AppError;

/// Creates a blocking HTTP client that sends the API key and JSON `Accept`
/// header with every request.
///
/// # Arguments
/// * `api_key` - Value for the `Authorization` header
/// * `timeout_seconds` - Per-request timeout, covering connect and body read
///
/// # Errors
/// * `AppError::Config` - the key contains characters not allowed in a header
/// * `AppError::ApiFetch` - the TLS backend could not be initialized
pub fn create_http_client_with_timeout(
    api_key: &str,
    timeout_seconds: u64,
) -> Result<Client, AppError> {
    let mut auth = HeaderValue::from_str(api_key.trim())
        .map_err(|_| AppError::config_error("API key is not a valid header value"))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    Ok(client)
}
