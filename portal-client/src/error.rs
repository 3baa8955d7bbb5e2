//! Error types for the Seqera client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, SeqeraError>;

/// Failures exposed by the Seqera client.
///
/// Exactly two kinds exist: a configuration problem only an operator can fix,
/// and a service problem on the platform side (error status, timeout, or a
/// success response missing the data it promised).
#[derive(Debug, Clone, Error)]
pub enum SeqeraError {
    /// A required configuration value is missing
    #[error("Missing required environment variable: {0}")]
    Configuration(String),

    /// The platform rejected or failed the call
    #[error("{message}")]
    Service {
        /// HTTP status code, when the platform answered at all
        status: Option<u16>,
        /// Error message describing the failure
        message: String,
    },
}

impl SeqeraError {
    /// Create a service error without an HTTP status (timeouts, bad bodies)
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            status: None,
            message: message.into(),
        }
    }

    /// Create a service error from a platform status code and body
    pub fn service_status(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Check if this error is fixable only by deployment configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<reqwest::Error> for SeqeraError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service {
            status: err.status().map(|s| s.as_u16()),
            message: format!("Seqera request failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_is_distinguishable() {
        let err = SeqeraError::Configuration("WORK_DIR".to_string());
        assert!(err.is_configuration());
        assert!(!SeqeraError::service("boom").is_configuration());
    }

    #[test]
    fn test_service_status_display() {
        let err = SeqeraError::service_status(500, "Seqera workflow launch failed: 500 oops");
        assert_eq!(
            err.to_string(),
            "Seqera workflow launch failed: 500 oops"
        );
    }
}
