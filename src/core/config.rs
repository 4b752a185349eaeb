use std::env;

use crate::errors::AdvisorError;

/// Bedrock model invoked when `BEDROCK_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-v2";

/// Completion token budget used when `MAX_ANALYSIS_TOKENS` is not set.
pub const DEFAULT_MAX_ANALYSIS_TOKENS: u32 = 300;

/// Region queried when the request body does not name one.
pub const DEFAULT_COST_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_id: String,
    pub max_analysis_tokens: u32,
    pub default_region: String,
}

impl AppConfig {
    /// Reads configuration from the environment. Every field has a
    /// compiled-in default, so an empty environment is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_ANALYSIS_TOKENS` is set but not a valid
    /// unsigned integer.
    pub fn from_env() -> Result<Self, AdvisorError> {
        let max_analysis_tokens = match env::var("MAX_ANALYSIS_TOKENS") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|e| AdvisorError::ConfigError(format!("MAX_ANALYSIS_TOKENS: {e}")))?,
            Err(_) => DEFAULT_MAX_ANALYSIS_TOKENS,
        };

        Ok(Self {
            model_id: env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            max_analysis_tokens,
            default_region: env::var("DEFAULT_COST_REGION")
                .unwrap_or_else(|_| DEFAULT_COST_REGION.to_string()),
        })
    }
}
