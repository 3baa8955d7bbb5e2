//! Workflow launch and run DTOs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound payload failed validation before any outbound call was made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("pipeline is required")]
    PipelineRequired,
}

/// User-supplied workflow parameters.
///
/// The schema is strict: any field not declared here rejects the whole
/// request rather than being silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchForm {
    /// Workflow pipeline repository or URL
    pub pipeline: String,
    /// Revision or branch of the pipeline to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Profiles that customize the workflow
    #[serde(rename = "configProfiles", default)]
    pub config_profiles: Vec<String>,
    /// Human-readable workflow run name
    #[serde(rename = "runName", default, skip_serializing_if = "Option::is_none")]
    pub run_name: Option<String>,
    /// YAML-style parameter overrides
    #[serde(rename = "paramsText", default, skip_serializing_if = "Option::is_none")]
    pub params_text: Option<String>,
}

impl LaunchForm {
    /// Normalizes the form in place and checks the required fields.
    ///
    /// `pipeline` is trimmed of surrounding whitespace before use; an empty
    /// or whitespace-only value is rejected.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let trimmed = self.pipeline.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::PipelineRequired);
        }
        if trimmed.len() != self.pipeline.len() {
            self.pipeline = trimmed.to_string();
        }
        Ok(())
    }
}

/// Top-level launch request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchRequest {
    pub launch: LaunchForm,
    /// Optional Seqera dataset ID to attach to the workflow
    #[serde(rename = "datasetId", default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
}

/// Response returned to the caller after a successful launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchResponse {
    pub message: String,
    pub run_id: String,
    pub status: String,
    pub submit_time: chrono::DateTime<chrono::Utc>,
}

/// Response returned when a run is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub message: String,
    pub run_id: String,
    pub status: String,
}

/// Platform-side run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    Submitted,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    #[default]
    Unknown,
}

/// Single entry in a run listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub id: String,
    pub run: String,
    pub workflow: String,
    pub status: RunStatus,
    pub date: String,
    pub cancel: String,
}

/// Paged run listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRunsResponse {
    pub runs: Vec<RunInfo>,
    pub total: usize,
    pub limit: u32,
    pub offset: u32,
}

/// Log excerpt for a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLogs {
    pub truncated: bool,
    pub entries: Vec<String>,
    pub rewind_token: String,
    pub forward_token: String,
    pub pending: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<LogDownload>>,
}

/// Downloadable log artifact reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDownload {
    pub save_name: String,
    pub file_name: String,
    pub display_text: String,
}

/// Detailed information about a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDetails {
    pub requires_attention: bool,
    pub status: RunStatus,
    pub owner_id: i64,
    pub repository: String,
    pub id: String,
    pub submit: String,
    pub start: String,
    pub complete: String,
    pub date_created: String,
    pub last_updated: String,
    pub run_name: String,
    pub session_id: String,
    pub profile: String,
    pub work_dir: String,
    pub commit_id: String,
    pub user_name: String,
    pub script_id: String,
    pub revision: String,
    pub command_line: String,
    pub project_name: String,
    pub script_name: String,
    pub launch_id: String,
    pub config_files: Vec<String>,
    pub params: std::collections::HashMap<String, String>,
}
