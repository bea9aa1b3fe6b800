use serde::{Deserialize, Serialize};

/// Author of a message in the completion input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of the two-message prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for the OpenAI Responses API (`POST /responses`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier, e.g. "gpt-4.1-mini".
    pub model: String,
    /// System message first, then the user message.
    pub input: Vec<InputMessage>,
    /// Cap on generated tokens.
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        max_output_tokens: u32,
    ) -> Self {
        CompletionRequest {
            model: model.into(),
            input: vec![
                InputMessage { role: Role::System, content: system.into() },
                InputMessage { role: Role::User, content: user.into() },
            ],
            max_output_tokens,
        }
    }
}
