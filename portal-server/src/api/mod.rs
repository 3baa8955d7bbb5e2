//! API Module
//!
//! HTTP API layer for the portal backend.
//! Each submodule handles endpoints for a specific domain.

pub mod dataset;
pub mod error;
pub mod health;
pub mod workflow;

use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use portal_client::{SeqeraClient, SeqeraConfig, SeqeraError};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use error::ApiError;

/// Shared state handed to every handler.
///
/// Holds the outcome of resolving the Seqera configuration at startup so a
/// misconfigured deployment answers launches with a configuration error
/// instead of refusing to boot.
#[derive(Clone)]
pub struct AppState {
    pub seqera: Result<SeqeraClient, SeqeraError>,
}

impl AppState {
    /// Build state from the process environment
    pub fn from_env() -> Self {
        Self {
            seqera: SeqeraConfig::from_env().map(SeqeraClient::new),
        }
    }

    /// Build state around an already-configured client
    pub fn with_client(client: SeqeraClient) -> Self {
        Self { seqera: Ok(client) }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Workflow endpoints
        .route("/api/workflows/launch", post(workflow::launch_workflow))
        .route("/api/workflows/runs", get(workflow::list_runs))
        .route(
            "/api/workflows/{run_id}/cancel",
            post(workflow::cancel_workflow),
        )
        .route("/api/workflows/{run_id}/logs", get(workflow::get_logs))
        .route(
            "/api/workflows/{run_id}/details",
            get(workflow::get_details),
        )
        // Dataset endpoints
        .route("/api/workflows/datasets/upload", post(dataset::upload_dataset))
        // Add state and middleware
        .with_state(state)
        // The portal frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Anything that escapes a handler still answers with a 500 body
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Internal server error".to_string()
    };

    ApiError::InternalError(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState {
            seqera: Err(SeqeraError::Configuration("SEQERA_API_URL".to_string())),
        })
    }

    async fn post_launch(body: &str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/workflows/launch");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_malformed_body_is_422() {
        let (status, body) = post_launch("{not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_422() {
        let (status, body) = post_launch(r#"{"launch": {"pipeline": "p"}}"#, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_field_is_422() {
        let (status, body) =
            post_launch(r#"{"launch": {"pipeline": "p"}, "extra": 1}"#, Some("application/json"))
                .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_nested_field_is_422() {
        let (status, _) = post_launch(
            r#"{"launch": {"pipeline": "p", "unknown": true}}"#,
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health_route_is_200() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
