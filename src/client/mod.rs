//! Outbound completion calls.
//!
//! Handlers depend on [`CompletionClient`] rather than on HTTP directly so
//! tests can hand them canned envelopes without network access.

pub mod openai;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::completion::CompletionRequest;

pub use openai::OpenAiClient;

/// A single request/response exchange with a completion API.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one completion request and return the parsed response envelope.
    ///
    /// Implementations make exactly one attempt; there is no retry.
    async fn complete(&self, api_key: &str, request: &CompletionRequest)
        -> Result<Value, ApiError>;
}
