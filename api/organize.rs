use std::sync::Arc;

use plutox_api::client::OpenAiClient;
use plutox_api::config::Config;
use plutox_api::handlers::organize;
use plutox_api::logging;
use vercel_runtime::{run, Error, Request};

/// POST /api/organize — turn a brain dump into a decision structure.
///
/// Config and the HTTP client are built once per cold start and shared
/// by every invocation of this function instance.
#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    let config = Arc::new(Config::from_env());
    let client = Arc::new(OpenAiClient::new(&config)?);
    tracing::info!(model = %config.model, "organize function starting");

    run(move |req: Request| {
        let config = Arc::clone(&config);
        let client = Arc::clone(&client);
        async move { organize::handle(req, &config, client.as_ref()).await }
    })
    .await
}
