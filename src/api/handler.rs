//! API Lambda handler - the cost advisory pipeline.
//!
//! This module handles:
//! - Request validation (body extraction and JSON parsing)
//! - The Cost Explorer query for the trailing week of spend
//! - The Bedrock completion call that turns the cost data into prose
//! - Response assembly and the uniform error-to-500 mapping

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::ai::ModelClient;
use crate::core::config::AppConfig;
use crate::core::models::AdvisorRequest;
use crate::costs::CostExplorerClient;
use crate::errors::AdvisorError;

/// Tag label used in responses when the request did not scope to a tag.
pub const ALL_INFRASTRUCTURE_LABEL: &str = "All infrastructure";

/// Lambda handler for the API entrypoint.
///
/// Runs the advisory pipeline and maps any failure - malformed body, bad tag,
/// Cost Explorer error, Bedrock error, unexpected response shape - into a
/// single 500 response carrying the error's text. The handler itself never
/// fails the invocation; the runtime always receives a proxy response.
#[tracing::instrument(level = "info", skip(costs, model, event))]
pub async fn function_handler(
    costs: &CostExplorerClient,
    model: &ModelClient,
    event: LambdaEvent<Value>,
) -> Result<impl Serialize, Error> {
    info!("Cost advisor received request: {:?}", event.payload);

    match advise(costs, model, &event.payload).await {
        Ok(response_body) => Ok(helpers::ok_response(&response_body)),
        Err(e) => {
            error!("Cost advisory request failed: {}", e);
            Ok(helpers::err_response(500, &e.to_string()))
        }
    }
}

/// The linear pipeline: parse → fetch costs → generate analysis → assemble.
///
/// The analysis call is only reached once the cost query has succeeded.
async fn advise(
    costs: &CostExplorerClient,
    model: &ModelClient,
    payload: &Value,
) -> Result<Value, AdvisorError> {
    let config = AppConfig::from_env()?;

    let body = parsing::extract_body(payload)?;
    let request: AdvisorRequest = parsing::parse_request(body)?;

    let region = request
        .region
        .unwrap_or_else(|| config.default_region.clone());

    let cost_data = costs.fetch_costs(&region, request.tag.as_deref()).await?;
    let analysis = model.generate_analysis(&config, &cost_data).await?;

    let tag_label = request
        .tag
        .unwrap_or_else(|| ALL_INFRASTRUCTURE_LABEL.to_string());

    Ok(json!({
        "region": region,
        "tag": tag_label,
        "cost_data": cost_data,
        "analysis": analysis,
    }))
}
