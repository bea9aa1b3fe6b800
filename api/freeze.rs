use std::sync::Arc;

use plutox_api::client::OpenAiClient;
use plutox_api::config::Config;
use plutox_api::handlers::freeze;
use plutox_api::logging;
use vercel_runtime::{run, Error, Request};

/// POST /api/freeze — commit a structured decision to one option.
#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    let config = Arc::new(Config::from_env());
    let client = Arc::new(OpenAiClient::new(&config)?);
    tracing::info!(model = %config.model, "freeze function starting");

    run(move |req: Request| {
        let config = Arc::clone(&config);
        let client = Arc::clone(&client);
        async move { freeze::handle(req, &config, client.as_ref()).await }
    })
    .await
}
