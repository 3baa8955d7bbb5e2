//! Workflow API Handlers
//!
//! HTTP endpoints for launching and inspecting workflow runs. The launch
//! handler is a straight validate -> forward -> translate pipeline with no
//! retries; every failure surfaces immediately to the caller.
//!
//! If the inbound connection drops mid-launch, axum drops the handler
//! future, which also aborts the in-flight platform call.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use portal_core::dto::workflow::{
    CancelResponse, LaunchRequest, LaunchResponse, ListRunsResponse, RunDetails, RunLogs,
};
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiJson, ApiResult};

/// POST /api/workflows/launch
/// Launch a workflow on the Seqera Platform
pub async fn launch_workflow(
    State(state): State<AppState>,
    ApiJson(mut req): ApiJson<LaunchRequest>,
) -> ApiResult<(StatusCode, Json<LaunchResponse>)> {
    req.launch.validate()?;

    tracing::info!("Launching workflow: {}", req.launch.pipeline);

    let client = state
        .seqera
        .as_ref()
        .map_err(|e| ApiError::Configuration(e.to_string()))?;

    let result = client
        .launch_workflow(&req.launch, req.dataset_id.as_deref())
        .await?;

    let response = LaunchResponse {
        message: "Workflow launched successfully".to_string(),
        run_id: result.workflow_id,
        status: result.status,
        submit_time: chrono::Utc::now(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/workflows/{run_id}/cancel
/// Cancel a running workflow
pub async fn cancel_workflow(Path(run_id): Path<String>) -> Json<CancelResponse> {
    tracing::info!("Cancelling workflow run: {}", run_id);

    // TODO: relay to the platform cancel endpoint
    Json(CancelResponse {
        message: "Workflow cancelled successfully".to_string(),
        run_id,
        status: "cancelled".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ListRunsQuery {
    pub status: Option<String>,
    pub workspace: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// GET /api/workflows/runs
/// List workflow runs with optional filters
pub async fn list_runs(Query(params): Query<ListRunsQuery>) -> Json<ListRunsResponse> {
    tracing::debug!(
        "Listing runs (status: {:?}, workspace: {:?})",
        params.status,
        params.workspace
    );

    // TODO: relay to the platform run-listing endpoint
    Json(ListRunsResponse {
        runs: Vec::new(),
        total: 0,
        limit: params.limit.unwrap_or(50),
        offset: params.offset.unwrap_or(0),
    })
}

/// GET /api/workflows/{run_id}/logs
/// Get logs for a workflow run
pub async fn get_logs(Path(run_id): Path<String>) -> Json<RunLogs> {
    tracing::debug!("Getting logs for run: {}", run_id);

    // TODO: relay to the platform log endpoint
    Json(RunLogs {
        message: "Logs endpoint - implementation pending".to_string(),
        ..Default::default()
    })
}

/// GET /api/workflows/{run_id}/details
/// Get detailed information about a workflow run
pub async fn get_details(Path(run_id): Path<String>) -> Json<RunDetails> {
    tracing::debug!("Getting details for run: {}", run_id);

    // TODO: relay to the platform workflow-describe endpoint
    Json(RunDetails {
        id: run_id,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use mockito::{Matcher, Server};
    use portal_client::{SeqeraClient, SeqeraConfig, SeqeraError};

    fn request(body: &str) -> LaunchRequest {
        serde_json::from_str(body).unwrap()
    }

    fn state_for(server: &Server) -> AppState {
        AppState::with_client(SeqeraClient::new(SeqeraConfig::new(
            server.url(),
            "tok",
            "ws-1",
            "ce-1",
            "/work",
        )))
    }

    fn misconfigured_state() -> AppState {
        AppState {
            seqera: Err(SeqeraError::Configuration("SEQERA_API_URL".to_string())),
        }
    }

    #[tokio::test]
    async fn test_launch_returns_201_with_run_id() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/workflow/launch")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflowId": "wf-1", "status": "RUNNING"}"#)
            .create_async()
            .await;

        let (status, Json(body)) = launch_workflow(
            State(state_for(&server)),
            ApiJson(request(r#"{"launch": {"pipeline": "nf-core/hello"}}"#)),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.run_id, "wf-1");
        assert_eq!(body.status, "RUNNING");
        assert_eq!(body.message, "Workflow launched successfully");
    }

    #[tokio::test]
    async fn test_launch_validation_failure_is_422() {
        let err = launch_workflow(
            State(misconfigured_state()),
            ApiJson(request(r#"{"launch": {"pipeline": "   "}}"#)),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_launch_missing_configuration_is_500() {
        let err = launch_workflow(
            State(misconfigured_state()),
            ApiJson(request(r#"{"launch": {"pipeline": "p"}}"#)),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_launch_platform_failure_is_502() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/workflow/launch")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal platform error")
            .create_async()
            .await;

        let err = launch_workflow(
            State(state_for(&server)),
            ApiJson(request(r#"{"launch": {"pipeline": "p"}}"#)),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_cancel_is_a_placeholder() {
        let Json(body) = cancel_workflow(Path("wf-1".to_string())).await;
        assert_eq!(body.run_id, "wf-1");
        assert_eq!(body.status, "cancelled");
    }

    #[tokio::test]
    async fn test_list_runs_defaults() {
        let Json(body) = list_runs(Query(ListRunsQuery {
            status: None,
            workspace: None,
            limit: None,
            offset: None,
        }))
        .await;
        assert!(body.runs.is_empty());
        assert_eq!(body.limit, 50);
        assert_eq!(body.offset, 0);
    }
}
