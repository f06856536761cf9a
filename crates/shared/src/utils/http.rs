use crate::config::ApiConfig;
use crate::errors::ApiError;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// One shared client per application; collaborator APIs clone it cheaply.
pub fn build_http_client(config: &ApiConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Maps a non-2xx response into a typed rejection, draining the body for
/// the backend's message text.
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
