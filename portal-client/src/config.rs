//! Seqera Platform connection settings
//!
//! All five values are required; a missing one is a deployment mistake, not a
//! platform failure, and is reported as `SeqeraError::Configuration`.

use crate::error::{Result, SeqeraError};

/// Connection settings for the Seqera Platform API.
#[derive(Debug, Clone)]
pub struct SeqeraConfig {
    /// Base URL of the platform API (e.g., "https://api.cloud.seqera.io")
    pub api_url: String,
    /// Personal or service access token
    pub access_token: String,
    /// Workspace the launches belong to
    pub workspace_id: String,
    /// Compute environment the workflow runs on
    pub compute_env_id: String,
    /// Working directory for the workflow run
    pub work_dir: String,
}

impl SeqeraConfig {
    /// Creates a configuration from explicit values.
    ///
    /// Any trailing slash on `api_url` is stripped so request paths can be
    /// concatenated directly.
    pub fn new(
        api_url: impl Into<String>,
        access_token: impl Into<String>,
        workspace_id: impl Into<String>,
        compute_env_id: impl Into<String>,
        work_dir: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            workspace_id: workspace_id.into(),
            compute_env_id: compute_env_id.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Expected environment variables, all required:
    /// - SEQERA_API_URL
    /// - SEQERA_ACCESS_TOKEN
    /// - WORK_SPACE
    /// - COMPUTE_ID
    /// - WORK_DIR
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            required_env("SEQERA_API_URL")?,
            required_env("SEQERA_ACCESS_TOKEN")?,
            required_env("WORK_SPACE")?,
            required_env("COMPUTE_ID")?,
            required_env("WORK_DIR")?,
        ))
    }
}

fn required_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(SeqeraError::Configuration(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = SeqeraConfig::new("https://api.example.com/", "t", "ws", "ce", "/work");
        assert_eq!(config.api_url, "https://api.example.com");
    }

    #[test]
    fn test_from_env_reports_the_missing_variable() {
        // None of the SEQERA_* variables are set in the test environment, so
        // the first lookup fails and no client can ever be constructed.
        let err = SeqeraConfig::from_env().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("SEQERA_API_URL"));
    }
}
