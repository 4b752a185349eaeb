use cost_advisor::ai::ModelClient;
use cost_advisor::api::function_handler;
use cost_advisor::costs::CostExplorerClient;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    cost_advisor::setup_logging();

    // Long-lived client handles: built once per container, shared by every
    // invocation the runtime dispatches to the closure below.
    let shared_config = aws_config::from_env().load().await;
    let costs = CostExplorerClient::new(&shared_config);
    let model = ModelClient::new(&shared_config);
    let costs_ref = &costs;
    let model_ref = &model;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        function_handler(costs_ref, model_ref, event)
    }))
    .await
}
