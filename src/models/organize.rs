use serde::{Deserialize, Serialize};

/// API request body for the /api/organize endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeRequest {
    /// Free-form brain dump to turn into a decision structure.
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub text: String,
}

impl OrganizeRequest {
    /// The brain dump with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }
}
