use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to query Cost Explorer: {0}")]
    CostExplorerError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    BedrockError(String),

    #[error("Unexpected model response shape: {0}")]
    ShapeError(String),
}

impl From<serde_json::Error> for AdvisorError {
    fn from(error: serde_json::Error) -> Self {
        AdvisorError::ParseError(error.to_string())
    }
}
