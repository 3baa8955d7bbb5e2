//! Seqera Platform HTTP Client
//!
//! A typed client for the subset of the Seqera Platform REST API the portal
//! backend needs: launching workflows and creating/uploading datasets.
//!
//! # Example
//!
//! ```no_run
//! use portal_client::{SeqeraClient, SeqeraConfig};
//! use portal_core::dto::workflow::LaunchForm;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), portal_client::SeqeraError> {
//!     let client = SeqeraClient::new(SeqeraConfig::from_env()?);
//!
//!     let mut form: LaunchForm =
//!         serde_json::from_str(r#"{"pipeline": "nf-core/rnaseq"}"#).unwrap();
//!     form.validate().unwrap();
//!
//!     let result = client.launch_workflow(&form, None).await?;
//!     println!("Launched workflow: {}", result.workflow_id);
//!     Ok(())
//! }
//! ```

mod config;
pub mod error;

mod datasets;
mod workflows;

pub use config::SeqeraConfig;
pub use error::{Result, SeqeraError};
pub use workflows::LaunchResult;

use std::time::Duration;

use reqwest::Client;

/// Full round-trip budget for every platform call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the Seqera Platform API
#[derive(Debug, Clone)]
pub struct SeqeraClient {
    config: SeqeraConfig,
    client: Client,
}

impl SeqeraClient {
    /// Create a new client with the default 60 second timeout
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, the same condition
    /// under which `reqwest::Client::new` panics.
    pub fn new(config: SeqeraConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(config: SeqeraConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Connection settings in use by this client
    pub fn config(&self) -> &SeqeraConfig {
        &self.config
    }

    /// Checks the status and extracts the body text of an error response.
    ///
    /// On an error status the body is logged before the error is returned so
    /// platform rejections are visible even when the caller swallows them.
    async fn error_for_status(
        &self,
        context: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or("unknown"),
                body = %body,
                "Seqera API error"
            );
            return Err(SeqeraError::service_status(
                status.as_u16(),
                format!("{context}: {} {body}", status.as_u16()),
            ));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let client = SeqeraClient::new(SeqeraConfig::new(
            "https://api.example.com/",
            "token",
            "ws-1",
            "ce-1",
            "s3://bucket/work",
        ));
        assert_eq!(client.config().api_url, "https://api.example.com");
        assert_eq!(client.config().workspace_id, "ws-1");
    }

    #[test]
    fn test_client_with_custom_http_client() {
        let http_client = Client::new();
        let config = SeqeraConfig::new("http://localhost:8080", "t", "ws", "ce", "/w");
        let client = SeqeraClient::with_client(config, http_client);
        assert_eq!(client.config().api_url, "http://localhost:8080");
    }
}
