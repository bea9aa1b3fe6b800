use serde::{Deserialize, Serialize};

/// Names of the fields Freeze cannot work without, in wire form.
pub const REQUIRED_FIELDS: [&str; 4] = ["decision", "optionA", "optionB", "horizon"];

/// API request body for the /api/freeze endpoint.
///
/// Every field defaults to an empty string when absent; the four
/// required ones are checked by [`FreezeRequest::missing_required`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreezeRequest {
    /// The decision statement.
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub decision: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub option_a: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub option_b: String,
    /// Time horizon, e.g. "6 months".
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub horizon: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub nonnegotiables: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub constraints: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub fears: String,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub goal: String,
}

impl FreezeRequest {
    /// Required fields that are absent or empty, in wire form.
    ///
    /// Only the empty string is rejected; whitespace-only values pass.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let values = [&self.decision, &self.option_a, &self.option_b, &self.horizon];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}
