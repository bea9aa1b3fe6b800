//! POST /api/freeze — commit a structured decision to one option.

use serde_json::{Map, Value};
use vercel_runtime::{Body, Error, Request, Response};

use super::{complete_and_decode, ensure_post, parse_body, respond};
use crate::client::CompletionClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::freeze::{FreezeRequest, REQUIRED_FIELDS};
use crate::prompt::freeze_prompt;

/// Output token cap for Freeze completions.
pub const MAX_OUTPUT_TOKENS: u32 = 700;

/// Handle one Freeze request end to end.
///
/// The model is asked for `decision`, `summary`, `assumptions`,
/// `tradeoffs`, `next7days` and `fallback`; only `decision` is enforced
/// and the object is returned as parsed.
pub async fn handle(
    req: Request,
    config: &Config,
    client: &dyn CompletionClient,
) -> Result<Response<Body>, Error> {
    respond("freeze", freeze(&req, config, client).await)
}

async fn freeze(
    req: &Request,
    config: &Config,
    client: &dyn CompletionClient,
) -> Result<Map<String, Value>, ApiError> {
    ensure_post(req)?;
    let api_key = config.api_key()?;

    let payload: FreezeRequest = parse_body(req)?;
    let missing = payload.missing_required();
    if !missing.is_empty() {
        tracing::debug!(endpoint = "freeze", missing = ?missing, "required fields absent");
        return Err(ApiError::MissingField(format!(
            "Missing required fields: {}",
            REQUIRED_FIELDS.join(", ")
        )));
    }

    tracing::info!(endpoint = "freeze", model = %config.model, "freezing decision");
    complete_and_decode(client, config, api_key, freeze_prompt(&payload), MAX_OUTPUT_TOKENS).await
}
