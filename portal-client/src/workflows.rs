//! Workflow launch API

use portal_core::dto::workflow::LaunchForm;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::SeqeraClient;
use crate::error::{Result, SeqeraError};

/// Run name used when the form does not supply one.
const DEFAULT_RUN_NAME: &str = "hello-from-ui";
/// Defensive default; `pipeline` is required upstream, so this is only
/// reachable if validation was bypassed.
const DEFAULT_PIPELINE: &str = "https://github.com/nextflow-io/hello";
const DEFAULT_REVISION: &str = "main";
const PRE_RUN_SCRIPT: &str = "module load nextflow";

/// Outcome of a successful workflow launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResult {
    pub workflow_id: String,
    pub status: String,
    pub message: Option<String>,
}

impl SeqeraClient {
    /// Launch a workflow on the Seqera Platform
    ///
    /// # Arguments
    /// * `form` - Validated launch parameters
    /// * `dataset_id` - Optional dataset to attach to the run
    ///
    /// # Returns
    /// The platform-assigned workflow id plus its reported status
    pub async fn launch_workflow(
        &self,
        form: &LaunchForm,
        dataset_id: Option<&str>,
    ) -> Result<LaunchResult> {
        let config = self.config();
        let payload = build_launch_payload(
            &config.compute_env_id,
            &config.workspace_id,
            &config.work_dir,
            form,
            dataset_id,
        );

        let url = format!(
            "{}/workflow/launch?workspaceId={}",
            config.api_url, config.workspace_id
        );
        tracing::info!(
            url = %url,
            workspace_id = %config.workspace_id,
            compute_env_id = %config.compute_env_id,
            pipeline = %payload["launch"]["pipeline"],
            run_name = %payload["launch"]["runName"],
            "Launching workflow via Seqera API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let response = self
            .error_for_status("Seqera workflow launch failed", response)
            .await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SeqeraError::service(format!("Failed to parse Seqera response: {e}")))?;

        let Some(workflow_id) = extract_workflow_id(&body) else {
            return Err(SeqeraError::service(
                "Seqera workflow launch succeeded but did not return a workflowId",
            ));
        };

        let status = body
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("submitted")
            .to_string();
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(LaunchResult {
            workflow_id,
            status,
            message,
        })
    }
}

/// Builds the `{"launch": {...}}` body the platform expects.
fn build_launch_payload(
    compute_env_id: &str,
    workspace_id: &str,
    work_dir: &str,
    form: &LaunchForm,
    dataset_id: Option<&str>,
) -> Value {
    let pipeline = if form.pipeline.is_empty() {
        DEFAULT_PIPELINE
    } else {
        form.pipeline.as_str()
    };

    let mut launch = json!({
        "computeEnvId": compute_env_id,
        "runName": form.run_name.as_deref().unwrap_or(DEFAULT_RUN_NAME),
        "pipeline": pipeline,
        "workDir": work_dir,
        "workspaceId": workspace_id,
        "revision": form.revision.as_deref().unwrap_or(DEFAULT_REVISION),
        "paramsText": form.params_text.as_deref().unwrap_or(""),
        "configProfiles": form.config_profiles,
        "preRunScript": PRE_RUN_SCRIPT,
        "resume": false,
    });

    if let Some(id) = dataset_id {
        launch["datasetIds"] = json!([id]);
    }

    json!({ "launch": launch })
}

/// Pulls the workflow id out of a launch response body.
///
/// The platform reports it either at the top level or nested under `data`;
/// the first non-empty value wins.
fn extract_workflow_id(body: &Value) -> Option<String> {
    [&body["workflowId"], &body["data"]["workflowId"]]
        .into_iter()
        .filter_map(Value::as_str)
        .find(|id| !id.is_empty())
        .map(str::to_string)
}
