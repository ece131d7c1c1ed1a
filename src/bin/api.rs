use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use mime_detector::core::config::AppConfig;
use serde_json::Value;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    mime_detector::setup_logging();

    // Built once at cold start; every invocation shares it read-only.
    let config = Arc::new(AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?);
    info!(service = %config.service_name, cors = ?config.cors, "Starting API");
    if !config.cors.is_permissive() {
        warn!(cors = ?config.cors, "CORS policy narrowed by environment override");
    }

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let config = Arc::clone(&config);
        async move { mime_detector::api::handler(&config, event).await }
    }))
    .await
}
