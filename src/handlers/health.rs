//! GET /api/health — liveness probe.

use serde_json::json;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::config::Config;
use crate::version;

/// Report liveness, crate version and whether the API key is configured.
pub async fn handle(_req: Request, config: &Config) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "version": version(),
        "model": config.model,
        "api_key_configured": config.api_key().is_ok(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-store")
        .body(Body::Text(payload.to_string()))?)
}
