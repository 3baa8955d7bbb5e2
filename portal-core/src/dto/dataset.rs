//! Dataset DTOs
//!
//! Shapes for creating a Seqera dataset and uploading samplesheet data to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound request for the dataset upload endpoint.
///
/// `form_data` is an arbitrary key/value object; it becomes a single-row CSV
/// on the platform side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetUploadRequest {
    #[serde(rename = "formData")]
    pub form_data: Map<String, Value>,
    #[serde(rename = "datasetName", default, skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(
        rename = "datasetDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dataset_description: Option<String>,
}

/// Platform response to a dataset creation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasetResponse {
    pub dataset: DatasetInfo,
}

/// Dataset as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Client-side outcome of a dataset upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetUploadResponse {
    pub success: bool,
    pub dataset_id: String,
    pub message: String,
}

/// Response returned to the caller after create + upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetUploadResult {
    pub message: String,
    pub dataset_id: String,
    pub success: bool,
}
