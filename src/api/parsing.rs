use serde_json::Value;

use crate::core::models::AdvisorRequest;
use crate::errors::AdvisorError;

/// Pulls the JSON-string `body` out of an API Gateway proxy event payload.
///
/// # Errors
///
/// Returns an error if the body is absent or not a string.
pub fn extract_body(payload: &Value) -> Result<&str, AdvisorError> {
    payload
        .get("body")
        .ok_or_else(|| AdvisorError::ParseError("Request missing body".to_string()))?
        .as_str()
        .ok_or_else(|| AdvisorError::ParseError("Request body is not a string".to_string()))
}

/// Parses a request body into an [`AdvisorRequest`].
///
/// # Errors
///
/// Returns an error if the body is not valid JSON for the request shape.
pub fn parse_request(body: &str) -> Result<AdvisorRequest, AdvisorError> {
    serde_json::from_str(body)
        .map_err(|e| AdvisorError::ParseError(format!("Invalid request JSON: {e}")))
}

/// Splits a `key:value` cost-allocation tag on its first `:`.
///
/// # Errors
///
/// Returns an error if the tag contains no `:` separator.
pub fn split_tag(tag: &str) -> Result<(&str, &str), AdvisorError> {
    tag.split_once(':').ok_or_else(|| {
        AdvisorError::ParseError(format!("Invalid tag filter '{tag}': expected key:value"))
    })
}
