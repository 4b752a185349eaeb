//! Bedrock model client module
//!
//! Encapsulates the `InvokeModel` interaction for generating cost analyses.

use aws_sdk_bedrockruntime::Client as BedrockSdkClient;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::AdvisorError;

/// Instruction prefixed to the cost payload in every analysis prompt.
const ANALYSIS_INSTRUCTION: &str =
    "Analyze the following AWS cost data and provide insights in simple terms: ";

/// Bedrock API client for generating cost analyses
pub struct ModelClient {
    client: BedrockSdkClient,
}

impl ModelClient {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: BedrockSdkClient::new(shared_config),
        }
    }

    /// Asks the configured model for a plain-language analysis of the given
    /// cost data.
    ///
    /// # Errors
    ///
    /// Returns an error if the `InvokeModel` call fails or the response body
    /// is not JSON carrying a string `completion` field.
    pub async fn generate_analysis(
        &self,
        config: &AppConfig,
        cost_data: &Value,
    ) -> Result<String, AdvisorError> {
        let prompt = build_prompt(cost_data)?;

        #[cfg(feature = "debug-logs")]
        info!("Using Bedrock prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(model_id = %config.model_id, "Requesting cost analysis");

        let request_body = json!({
            "prompt": prompt,
            "max_tokens": config.max_analysis_tokens,
        });

        let response = self
            .client
            .invoke_model()
            .model_id(&config.model_id)
            .content_type("application/json")
            .body(Blob::new(request_body.to_string().into_bytes()))
            .send()
            .await
            .map_err(|e| AdvisorError::BedrockError(format!("{}", DisplayErrorContext(&e))))?;

        let response_body: Value = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| AdvisorError::ShapeError(format!("Model response is not JSON: {e}")))?;

        extract_completion(&response_body)
    }
}

/// Builds the analysis prompt: fixed instruction text followed by a
/// pretty-printed JSON rendering of the cost data.
///
/// # Errors
///
/// Returns an error if the cost data cannot be rendered as JSON.
pub fn build_prompt(cost_data: &Value) -> Result<String, AdvisorError> {
    let rendered = serde_json::to_string_pretty(cost_data)?;
    Ok(format!("{ANALYSIS_INSTRUCTION}{rendered}"))
}

/// Extracts the `completion` text field from a model response body.
///
/// # Errors
///
/// Returns an error if the field is absent or not a string.
pub fn extract_completion(response_body: &Value) -> Result<String, AdvisorError> {
    response_body
        .get("completion")
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
        .ok_or_else(|| {
            AdvisorError::ShapeError("No completion field in model response".to_string())
        })
}
