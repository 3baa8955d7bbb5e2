//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portal_client::SeqeraError;
use portal_core::dto::workflow::ValidationError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Inbound payload failed validation; never reached the platform
    Validation(String),
    /// Deployment misconfiguration, fixable only by an operator
    Configuration(String),
    /// The platform rejected, failed, or mangled the call
    Upstream(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream platform error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<SeqeraError> for ApiError {
    fn from(err: SeqeraError) -> Self {
        match err {
            SeqeraError::Configuration(_) => ApiError::Configuration(err.to_string()),
            SeqeraError::Service { .. } => ApiError::Upstream(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON extractor that reports every rejection as a validation failure.
///
/// The bare `Json` extractor answers malformed bodies with 400 and a missing
/// JSON content type with 415; the portal contract is 422 for any invalid
/// request body, with the same `{"error": ...}` shape as other failures.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ApiError::Validation("pipeline is required".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApiError::from(SeqeraError::Configuration(
                "WORK_DIR".into()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiError::from(SeqeraError::service_status(500, "down"))),
            StatusCode::BAD_GATEWAY
        );
    }
}
