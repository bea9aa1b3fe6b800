//! Error kinds surfaced by the Organize and Freeze endpoints.
//!
//! Every variant is terminal for the request and maps to exactly one
//! HTTP status. Upstream and model-output failures always carry the raw
//! text they were given so prompt or model drift can be diagnosed from
//! the response alone.

use thiserror::Error;
use vercel_runtime::{Body, Error, Response, StatusCode};

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required environment variable (the API key) is not set.
    #[error("Missing {0}")]
    ConfigMissing(&'static str),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body is not parseable JSON.
    #[error("Invalid JSON body")]
    InvalidJson,

    /// The body parsed but required fields are absent or empty.
    #[error("{0}")]
    MissingField(String),

    /// The completion API answered with a non-success status.
    #[error("OpenAI error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// The outbound call could not complete (connect, timeout, decode).
    #[error("OpenAI request failed: {0}")]
    Transport(String),

    /// No `{` anywhere in the model output.
    #[error("Model did not return JSON. Raw:\n{raw}")]
    NoJsonFound { raw: String },

    /// A `{...}` span was found but is not valid JSON.
    #[error("Failed to parse JSON. Raw:\n{raw}")]
    JsonParse { raw: String },

    /// Parsed, but not an object with a string `decision`.
    #[error("Invalid output shape. Raw:\n{raw}")]
    InvalidShape { raw: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ConfigMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. }
            | ApiError::Transport(_)
            | ApiError::NoJsonFound { .. }
            | ApiError::JsonParse { .. }
            | ApiError::InvalidShape { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short stable name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ConfigMissing(_) => "config_missing",
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::InvalidJson => "invalid_json",
            ApiError::MissingField(_) => "missing_field",
            ApiError::Upstream { .. } => "upstream_failure",
            ApiError::Transport(_) => "transport_failure",
            ApiError::NoJsonFound { .. } => "no_json_found",
            ApiError::JsonParse { .. } => "json_parse",
            ApiError::InvalidShape { .. } => "invalid_shape",
        }
    }

    /// Render as a plain-text HTTP response.
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let mut builder = Response::builder()
            .status(self.status())
            .header("Content-Type", "text/plain; charset=utf-8");
        if matches!(self, ApiError::MethodNotAllowed) {
            builder = builder.header("Allow", "POST");
        }
        Ok(builder.body(Body::Text(self.to_string()))?)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
