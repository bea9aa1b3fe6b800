//! Runtime configuration for the OpenAI-backed endpoints.
//!
//! Read once per cold start from the environment and passed explicitly
//! into the handlers, so tests can inject fake credentials.

use std::time::Duration;

use crate::error::ApiError;

/// Environment variable holding the OpenAI API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the outbound request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "OPENAI_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the Organize and Freeze handlers.
#[derive(Clone)]
pub struct Config {
    api_key: Option<String>,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Base URL of the Responses API, without trailing slash.
    pub base_url: String,
    /// Upper bound on a single outbound call.
    pub timeout: Duration,
}

impl Config {
    /// Creates a config with the given key and default model, URL and timeout.
    pub fn new(api_key: Option<String>) -> Self {
        Config {
            api_key: api_key.filter(|k| !k.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build the config from process environment variables.
    ///
    /// A missing key is not an error here: the handlers answer 500 per
    /// request so the function still deploys and reports the problem.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Config::new(lookup(API_KEY_ENV));
        if let Some(model) = non_empty(MODEL_ENV) {
            config.model = model;
        }
        if let Some(url) = non_empty(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = non_empty(TIMEOUT_ENV).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API key, or `ConfigMissing` when it was never set.
    pub fn api_key(&self) -> Result<&str, ApiError> {
        self.api_key
            .as_deref()
            .ok_or(ApiError::ConfigMissing(API_KEY_ENV))
    }

    /// Full URL of the Responses endpoint.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
