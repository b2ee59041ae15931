//! HTTP implementation of the registry client
//!
//! Talks to the management service's REST API. Every call is made exactly
//! once; a failed listing is reported to the caller, never retried here.

use super::RegistryClient;
use crate::config::{RegistryConfig, SecretString};
use crate::domain::{DumpError, ExportableEntity, RegistryError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Endpoint listing tool-group configurations
pub const TOOL_GROUP_CONFIGS_PATH: &str = "/api/v0/tool-groups/configs";

/// Endpoint listing MCP server configurations
pub const SERVER_CONFIGS_PATH: &str = "/api/v0/servers/configs";

/// Registry client backed by `reqwest`
pub struct HttpRegistryClient {
    /// Base URL without a trailing slash
    base_url: String,

    client: Client,

    access_token: Option<SecretString>,
}

impl HttpRegistryClient {
    /// Create a client from the registry configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            DumpError::Configuration(format!(
                "Invalid registry base URL '{}': {e}",
                config.base_url
            ))
        })?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled for the registry");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            DumpError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            access_token: config.access_token.clone(),
        })
    }

    async fn fetch_configs(&self, path: &str) -> Result<Vec<ExportableEntity>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Requesting entity configurations");

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            let token: &str = token.expose_secret().as_ref();
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::Timeout(format!("GET {url}: {e}"))
            } else {
                RegistryError::ConnectionFailed(format!("GET {url}: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body).into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| RegistryError::InvalidResponse(format!("{path}: {e}")))?;

        // An empty registry may answer `null` instead of `[]`
        let entities: Vec<ExportableEntity> =
            serde_json::from_str::<Option<Vec<ExportableEntity>>>(&body)
                .map_err(|e| RegistryError::InvalidResponse(format!("{path}: {e}")))?
                .unwrap_or_default();

        tracing::debug!(
            path = %path,
            count = entities.len(),
            "Received entity configurations"
        );

        Ok(entities)
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn list_tool_group_configs(&self) -> Result<Vec<ExportableEntity>> {
        self.fetch_configs(TOOL_GROUP_CONFIGS_PATH).await
    }

    async fn list_server_configs(&self) -> Result<Vec<ExportableEntity>> {
        self.fetch_configs(SERVER_CONFIGS_PATH).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Map a non-success status to a registry error
///
/// The registry reports failures as `{"error": "..."}`; that message is
/// preferred over the raw body when present.
fn status_error(status: StatusCode, body: &str) -> RegistryError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RegistryError::AuthenticationFailed(
            format!("{status}: {message} (exporting every entity requires admin access in enterprise mode)"),
        ),
        s if s.is_client_error() => RegistryError::ClientError {
            status: s.as_u16(),
            message,
        },
        s if s.is_server_error() => RegistryError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => RegistryError::InvalidResponse(format!("unexpected status {s}: {message}")),
    }
}
