//! OpenAI Responses API client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::CompletionClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::completion::CompletionRequest;

/// Calls `POST {base_url}/responses` with a bearer token.
pub struct OpenAiClient {
    client: Client,
    url: String,
}

impl OpenAiClient {
    /// Build a client whose calls are bounded by `config.timeout`.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(OpenAiClient {
            client,
            url: config.responses_url(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Value, ApiError> {
        tracing::debug!(
            url = %self.url,
            model = %request.model,
            max_output_tokens = request.max_output_tokens,
            "calling completion API"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = upstream_body(response.text().await);
            tracing::warn!(status = status.as_u16(), "completion API returned an error status");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Error body text for an upstream failure, keeping read errors visible.
fn upstream_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "could not read completion API error body");
            format!("<failed to read error body: {err}>")
        }
    }
}
