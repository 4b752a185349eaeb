/// Cost Advisor - an AWS Lambda that explains recent cloud spend in plain language.
///
/// This crate implements a single HTTP-triggered Lambda that answers a cost
/// advisory request in one linear pass:
/// 1. Parse the inbound body for a region and an optional `key:value` cost tag
/// 2. Query Cost Explorer for the trailing 7 days of unblended cost
/// 3. Ask a Bedrock text model for a plain-language analysis of that data
/// 4. Return the region, tag, raw cost data, and analysis as one JSON response
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - aws-sdk-costexplorer for the `GetCostAndUsage` billing query
/// - aws-sdk-bedrockruntime for the `InvokeModel` completion call
/// - Tokio for async runtime
///
/// Both SDK clients are built once at process start and injected into the
/// handler, so connection and credential setup is paid once per container
/// rather than once per request.
///
/// # Example
///
/// ```no_run
/// use cost_advisor::ai::ModelClient;
/// use cost_advisor::core::config::AppConfig;
/// use cost_advisor::costs::CostExplorerClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     cost_advisor::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let shared_config = aws_config::from_env().load().await;
///
///     let costs = CostExplorerClient::new(&shared_config);
///     let model = ModelClient::new(&shared_config);
///
///     // Fetch a week of production spend in Ireland and have it explained
///     let cost_data = costs.fetch_costs("eu-west-1", Some("env:prod")).await?;
///     let analysis = model.generate_analysis(&config, &cost_data).await?;
///     println!("{analysis}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod costs;
pub mod errors;

pub use errors::AdvisorError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// cost_advisor::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
