//! Domain models for the Plutox decision endpoints.
//!
//! Inbound payloads for Organize and Freeze, plus the outbound request
//! body sent to the completion API.

pub mod completion;
pub mod freeze;
pub mod organize;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept any JSON value for a text field, rendering scalars as text.
///
/// Numbers and `true` become their text form (`6` → "6"). Falsy scalars
/// (`0`, `false`, `null`) and arrays or objects become the empty string,
/// so validation reports them as missing instead of as a parse error.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "lenient_string")]
        value: String,
    }

    fn field(json: &str) -> String {
        serde_json::from_str::<Field>(&format!(r#"{{"value":{json}}}"#))
            .unwrap()
            .value
    }

    #[test]
    fn test_scalars_render_as_text() {
        assert_eq!(field(r#""six months""#), "six months");
        assert_eq!(field("6"), "6");
        assert_eq!(field("1.5"), "1.5");
        assert_eq!(field("-3"), "-3");
        assert_eq!(field("true"), "true");
    }

    #[test]
    fn test_falsy_and_structured_values_are_empty() {
        for json in ["0", "0.0", "false", "null", "[1,2]", r#"{"a":1}"#] {
            assert_eq!(field(json), "", "value: {json}");
        }
    }
}
