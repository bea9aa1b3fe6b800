//! Request handlers behind the serverless functions in `api/`.
//!
//! Organize and Freeze share one linear pipeline: method check, key
//! check, body parse, validation, prompt, one upstream call, then
//! extraction, recovery and shape check. Any failure ends the request
//! with a plain-text error response; nothing partial is returned.

pub mod freeze;
pub mod health;
pub mod organize;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::client::CompletionClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::completion::CompletionRequest;
use crate::prompt::Prompt;
use crate::recovery::decode_envelope;

/// Reject anything but POST.
pub(crate) fn ensure_post(req: &Request) -> Result<(), ApiError> {
    if *req.method() == http::Method::POST {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed)
    }
}

/// Parse the request body as JSON into `T`.
///
/// A body that is valid JSON but not an object yields `T::default()`, so
/// the caller's field validation reports what is missing.
pub(crate) fn parse_body<T>(req: &Request) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let bytes: &[u8] = req.body();
    let value: Value = serde_json::from_slice(bytes).map_err(|_| ApiError::InvalidJson)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|_| ApiError::InvalidJson)
}

/// Send the prompt upstream and turn the reply into a validated object.
pub(crate) async fn complete_and_decode(
    client: &dyn CompletionClient,
    config: &Config,
    api_key: &str,
    prompt: Prompt,
    max_output_tokens: u32,
) -> Result<Map<String, Value>, ApiError> {
    let request = CompletionRequest::new(
        config.model.as_str(),
        prompt.system,
        prompt.user,
        max_output_tokens,
    );
    let envelope = client.complete(api_key, &request).await?;
    decode_envelope(&envelope)
}

/// 200 response carrying the recovered object exactly as parsed.
pub(crate) fn json_response(body: &Map<String, Value>) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Cache-Control", "no-store")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Log the outcome of a pipeline run and render it as an HTTP response.
pub(crate) fn respond(
    endpoint: &'static str,
    outcome: Result<Map<String, Value>, ApiError>,
) -> Result<Response<Body>, Error> {
    match outcome {
        Ok(body) => {
            tracing::info!(endpoint, fields = body.len(), "request completed");
            json_response(&body)
        }
        Err(err) => {
            let status = err.status();
            if status.is_server_error() {
                tracing::error!(endpoint, kind = err.kind(), status = status.as_u16(), error = %err, "request failed");
            } else {
                tracing::info!(endpoint, kind = err.kind(), status = status.as_u16(), "request rejected");
            }
            err.into_response()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, serde::Deserialize)]
    struct Probe {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn test_parse_body_rejects_invalid_json() {
        let result = parse_body::<Probe>(&post("{not json"));
        assert!(matches!(result, Err(ApiError::InvalidJson)));
    }

    #[test]
    fn test_parse_body_rejects_empty_body() {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .body(Body::Empty)
            .unwrap();
        assert!(matches!(parse_body::<Probe>(&req), Err(ApiError::InvalidJson)));
    }

    #[test]
    fn test_parse_body_non_object_yields_default() {
        let probe = parse_body::<Probe>(&post("[1,2,3]")).unwrap();
        assert!(probe.name.is_empty());
        let probe = parse_body::<Probe>(&post("null")).unwrap();
        assert!(probe.name.is_empty());
    }

    #[test]
    fn test_ensure_post() {
        assert!(ensure_post(&post("{}")).is_ok());
        assert!(matches!(
            ensure_post(&request(http::Method::GET, "")),
            Err(ApiError::MethodNotAllowed)
        ));
    }

    #[test]
    fn test_json_response_headers() {
        let map = json!({ "decision": "x" }).as_object().cloned().unwrap();
        let response = json_response(&map).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Content-Type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(response.headers()["Cache-Control"], "no-store");
        assert_eq!(body_text(&response), r#"{"decision":"x"}"#);
    }

    #[tokio::test]
    async fn test_complete_and_decode_uses_configured_model() {
        let stub = StubClient::replying_text(r#"{"decision":"x"}"#);
        let config = config().with_model("gpt-test");
        let prompt = Prompt { system: "s".into(), user: "u".into() };

        let map = complete_and_decode(&stub, &config, "sk-test", prompt, 123)
            .await
            .unwrap();

        assert_eq!(map["decision"], "x");
        let sent = stub.last_request();
        assert_eq!(sent.model, "gpt-test");
        assert_eq!(sent.max_output_tokens, 123);
        assert_eq!(stub.calls.lock().unwrap()[0].0, "sk-test");
    }
}
