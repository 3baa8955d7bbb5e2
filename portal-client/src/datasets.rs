//! Dataset API
//!
//! Datasets hold samplesheet-style CSV data on the platform; a launch can
//! reference one by id. The portal builds the CSV from a flat form-data
//! object: one header row from the keys, one value row.

use std::time::{SystemTime, UNIX_EPOCH};

use portal_core::dto::dataset::{CreateDatasetResponse, DatasetUploadResponse};
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value, json};

use crate::SeqeraClient;
use crate::error::{Result, SeqeraError};

const DEFAULT_DESCRIPTION: &str = "Dataset for workflow submission";

impl SeqeraClient {
    /// Create a new dataset in the configured workspace
    ///
    /// # Arguments
    /// * `name` - Dataset name; a timestamped name is generated when absent
    /// * `description` - Dataset description
    pub async fn create_dataset(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<CreateDatasetResponse> {
        let config = self.config();
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("dataset-{}", unix_millis()));

        let url = format!(
            "{}/workspaces/{}/datasets/",
            config.api_url, config.workspace_id
        );
        tracing::info!(url = %url, name = %name, "Creating Seqera dataset");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.access_token)
            .json(&json!({
                "name": name,
                "description": description.unwrap_or(DEFAULT_DESCRIPTION),
            }))
            .send()
            .await?;

        let response = self
            .error_for_status("Seqera dataset creation failed", response)
            .await?;

        response
            .json()
            .await
            .map_err(|e| SeqeraError::service(format!("Failed to parse Seqera response: {e}")))
    }

    /// Upload form data to an existing dataset as a samplesheet CSV
    ///
    /// # Arguments
    /// * `dataset_id` - The dataset to upload into
    /// * `form_data` - Flat key/value object; becomes a single CSV row
    pub async fn upload_dataset(
        &self,
        dataset_id: &str,
        form_data: &Map<String, Value>,
    ) -> Result<DatasetUploadResponse> {
        let config = self.config();
        let csv = form_data_to_csv(form_data);

        let url = format!(
            "{}/workspaces/{}/datasets/{}/upload",
            config.api_url, config.workspace_id, dataset_id
        );
        tracing::info!(url = %url, dataset_id = %dataset_id, bytes = csv.len(), "Uploading dataset");

        let part = Part::bytes(csv.into_bytes())
            .file_name("samplesheet.csv")
            .mime_str("text/csv")?;
        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(Form::new().part("file", part))
            .send()
            .await?;

        let response = self
            .error_for_status("Seqera dataset upload failed", response)
            .await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SeqeraError::service(format!("Failed to parse Seqera response: {e}")))?;

        let dataset_id = body["version"]["datasetId"]
            .as_str()
            .unwrap_or(dataset_id)
            .to_string();

        Ok(DatasetUploadResponse {
            success: true,
            dataset_id,
            message: "Upload successful".to_string(),
        })
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Renders a form-data object as a two-line CSV: headers, then values.
///
/// Arrays join with `;`, nested objects are JSON-encoded, and any value
/// containing a comma, quote, or newline is quoted with `""` escaping.
fn form_data_to_csv(data: &Map<String, Value>) -> String {
    let headers = data.keys().cloned().collect::<Vec<_>>().join(",");
    let values = data
        .values()
        .map(csv_field)
        .collect::<Vec<_>>()
        .join(",");
    format!("{headers}\n{values}")
}

fn csv_field(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(csv_field)
            .collect::<Vec<_>>()
            .join(";"),
        Value::Object(_) => value.to_string(),
        other => other.to_string(),
    };

    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
