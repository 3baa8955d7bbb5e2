//! Dataset API Handlers
//!
//! HTTP endpoint for creating a dataset and uploading samplesheet data to it
//! in one call.

use std::time::Duration;

use axum::{Json, extract::State};
use portal_core::dto::dataset::{DatasetUploadRequest, DatasetUploadResult};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiJson, ApiResult};

/// How long the platform needs before a fresh dataset accepts uploads.
const DATASET_INIT_DELAY: Duration = Duration::from_secs(2);

/// POST /api/workflows/datasets/upload
/// Create a dataset, then upload the form data to it as a CSV
pub async fn upload_dataset(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DatasetUploadRequest>,
) -> ApiResult<Json<DatasetUploadResult>> {
    tracing::info!(
        "Uploading dataset ({} fields, name: {:?})",
        req.form_data.len(),
        req.dataset_name
    );

    let client = state
        .seqera
        .as_ref()
        .map_err(|e| ApiError::Configuration(e.to_string()))?;

    let created = client
        .create_dataset(
            req.dataset_name.as_deref(),
            req.dataset_description.as_deref(),
        )
        .await?;
    let dataset_id = created.dataset.id;

    tokio::time::sleep(DATASET_INIT_DELAY).await;

    let uploaded = client.upload_dataset(&dataset_id, &req.form_data).await?;

    Ok(Json(DatasetUploadResult {
        message: "Dataset created and uploaded successfully".to_string(),
        dataset_id: uploaded.dataset_id,
        success: uploaded.success,
    }))
}
