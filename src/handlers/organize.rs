//! POST /api/organize — turn a brain dump into a decision structure.

use serde_json::{Map, Value};
use vercel_runtime::{Body, Error, Request, Response};

use super::{complete_and_decode, ensure_post, parse_body, respond};
use crate::client::CompletionClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::organize::OrganizeRequest;
use crate::prompt::organize_prompt;

/// Output token cap for Organize completions.
pub const MAX_OUTPUT_TOKENS: u32 = 500;

/// Handle one Organize request end to end.
///
/// Success is a 200 with the model's object passed through verbatim. It
/// should carry `decision`, the two options, `horizon`, the free-text
/// context fields and up to 6 `missing_questions`; only `decision` is
/// enforced.
pub async fn handle(
    req: Request,
    config: &Config,
    client: &dyn CompletionClient,
) -> Result<Response<Body>, Error> {
    respond("organize", organize(&req, config, client).await)
}

async fn organize(
    req: &Request,
    config: &Config,
    client: &dyn CompletionClient,
) -> Result<Map<String, Value>, ApiError> {
    ensure_post(req)?;
    let api_key = config.api_key()?;

    let payload: OrganizeRequest = parse_body(req)?;
    let text = payload
        .trimmed_text()
        .ok_or_else(|| ApiError::MissingField("Missing text".to_string()))?;

    tracing::info!(endpoint = "organize", model = %config.model, text_len = text.len(), "organizing brain dump");
    complete_and_decode(client, config, api_key, organize_prompt(text), MAX_OUTPUT_TOKENS).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::*;
    use crate::models::completion::Role;
    use serde_json::json;
    use vercel_runtime::StatusCode;

    #[tokio::test]
    async fn test_missing_text_is_400_without_upstream_call() {
        for body in [r#"{}"#, r#"{"text":""}"#, r#"{"text":"   \n"}"#, r#"{"text":false}"#, r#"{"text":null}"#, "[]"] {
            let stub = StubClient::replying_text("unused");
            let response = handle(post(body), &config(), &stub).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(body_text(&response), "Missing text");
            assert_eq!(stub.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_400() {
        let stub = StubClient::replying_text("unused");
        let response = handle(post("text=hello"), &config(), &stub).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(&response), "Invalid JSON body");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_500() {
        let stub = StubClient::replying_text("unused");
        let response = handle(post(r#"{"text":"hi"}"#), &Config::new(None), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(&response), "Missing OPENAI_API_KEY");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_is_rejected() {
        let stub = StubClient::replying_text("unused");
        let response = handle(request(http::Method::GET, ""), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_passes_object_through() {
        let stub = StubClient::replying_text(r#"{"decision":"x"}"#);
        let response = handle(post(r#"{"text":"  should I move?  "}"#), &config(), &stub)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(&response), r#"{"decision":"x"}"#);
        assert_eq!(response.headers()["Cache-Control"], "no-store");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_outbound_request_shape() {
        let stub = StubClient::replying_text(r#"{"decision":"x"}"#);
        handle(post(r#"{"text":"  should I move?  "}"#), &config(), &stub)
            .await
            .unwrap();

        let sent = stub.last_request();
        assert_eq!(sent.model, "gpt-4.1-mini");
        assert_eq!(sent.max_output_tokens, 500);
        assert_eq!(sent.input.len(), 2);
        assert_eq!(sent.input[0].role, Role::System);
        assert_eq!(sent.input[1].role, Role::User);
        assert!(sent.input[1].content.starts_with("Brain dump:\nshould I move?\n\n"));
    }

    #[tokio::test]
    async fn test_all_fields_round_trip() {
        let out = json!({
            "decision": "Move to Berlin or stay?",
            "optionA": "Move",
            "optionB": "Stay",
            "horizon": "1 year",
            "nonnegotiables": "- family nearby",
            "constraints": "",
            "fears": "loneliness",
            "goal": "career growth",
            "missing_questions": ["Salary?", "Visa?"],
            "extra": { "nested": [1, 2] }
        });
        let stub = StubClient::replying_text(&out.to_string());
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response), out);
    }

    #[tokio::test]
    async fn test_fenced_output_is_returned_in_model_key_order() {
        let text = "```json\n{\"decision\":\"Move?\",\"optionB\":\"Stay\",\"optionA\":\"Move\",\"horizon\":\"1 year\"}\n```";
        let stub = StubClient::replying_text(text);
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(&response),
            r#"{"decision":"Move?","optionB":"Stay","optionA":"Move","horizon":"1 year"}"#
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_502_with_status_and_body() {
        let stub = StubClient::failing(ApiError::Upstream {
            status: 429,
            body: "rate limited".into(),
        });
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_text(&response), "OpenAI error (429): rate limited");
    }

    #[tokio::test]
    async fn test_prose_only_output_is_502_with_raw_text() {
        let stub = StubClient::replying_text("You should probably move.");
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_text(&response),
            "Model did not return JSON. Raw:\nYou should probably move."
        );
    }

    #[tokio::test]
    async fn test_array_output_is_invalid_shape() {
        let stub = StubClient::replying_text("[1,2,3]");
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_text(&response), "Invalid output shape. Raw:\n[1,2,3]");
    }

    #[tokio::test]
    async fn test_output_text_fallback_is_used() {
        let stub = StubClient::replying(json!({
            "output": [],
            "output_text": "```json\n{\"decision\":\"fallback\"}\n```"
        }));
        let response = handle(post(r#"{"text":"dump"}"#), &config(), &stub)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(&response), json!({ "decision": "fallback" }));
    }
}
