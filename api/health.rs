use std::sync::Arc;

use plutox_api::config::Config;
use plutox_api::handlers::health;
use plutox_api::logging;
use vercel_runtime::{run, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    let config = Arc::new(Config::from_env());

    run(move |req: Request| {
        let config = Arc::clone(&config);
        async move { health::handle(req, &config).await }
    })
    .await
}
