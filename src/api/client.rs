//! HTTP client for the TravelSathi registration endpoint

use super::error::ApiError;
use super::traits::RegistrationApi;
use crate::state::RegistrationRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Default API address
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Registration route relative to the API base
pub const REGISTER_PATH: &str = "/api/user/register";

/// Successful registration reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub status: StatusCode,
    pub message: Option<String>,
}

/// Pull the optional `message` out of a JSON reply.
///
/// Numbers and `true` are shown as written; `null`, `false`, `0`, objects and
/// arrays count as no message.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn client_builder(timeout: Option<Duration>) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder();
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

/// Client for the registration API
pub struct ApiClient {
    client: reqwest::Client,
    register_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`. Without a timeout the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = client_builder(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::from_client(client, base_url))
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: reqwest::Client, base_url: &str) -> Self {
        let register_url = format!("{}{}", base_url.trim_end_matches('/'), REGISTER_PATH);
        Self {
            client,
            register_url,
        }
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        let response = self
            .client
            .post(&self.register_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        // A body that cannot be read still leaves us with the status
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);

        tracing::debug!("Registration response: {}", status);

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(RegistrationResponse { status, message }),
            _ => Err(ApiError::Server { status, message }),
        }
    }
}
