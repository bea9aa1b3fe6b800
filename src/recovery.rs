//! Turning a Responses API envelope into a validated JSON object.
//!
//! Three steps shared by every endpoint:
//! 1. [`extract_text`] finds the model's answer inside the envelope.
//! 2. [`recover_json`] parses it, falling back to the first balanced
//!    `{...}` span when the model wrapped its JSON in prose or fences.
//! 3. [`validate_shape`] accepts only objects with a string `decision`.
//!
//! # Known limitation
//! The brace scan does not track string literals. A `{` or `}` inside a
//! quoted value counts toward the depth, so an unbalanced brace inside a
//! string truncates or overruns the candidate span.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Locate the model's textual output in a Responses API envelope.
///
/// Walks `output[]` then each item's `content[]` in order and returns the
/// first block's `text` string, else that block's `content` string. The
/// first match wins. Falls back to a top-level `output_text` string, then
/// to the empty string.
pub fn extract_text(envelope: &Value) -> String {
    let items = envelope
        .get("output")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for item in items {
        let blocks = item
            .get("content")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for block in blocks {
            if let Some(text) = block.get("text").and_then(Value::as_str) {
                return text.to_string();
            }
            if let Some(text) = block.get("content").and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    envelope
        .get("output_text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Return the first balanced `{...}` span of `text`, if any.
///
/// Depth goes up on `{` and down on `}` starting at the first `{`; the span
/// ends where depth returns to zero. Quoted strings are not special.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: i64 = 0;

    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return Some(&text[start..=start + offset]);
        }
    }
    None
}

/// Parse model output as JSON, recovering an embedded object if needed.
///
/// Errors carry the full raw text: `NoJsonFound` when no balanced span
/// exists, `JsonParse` when the span found is not valid JSON.
pub fn recover_json(text: &str) -> Result<Value, ApiError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let candidate = extract_first_json_object(text).ok_or_else(|| ApiError::NoJsonFound {
        raw: text.to_string(),
    })?;

    tracing::debug!(
        candidate_len = candidate.len(),
        raw_len = text.len(),
        "strict parse failed, retrying on first balanced object"
    );

    serde_json::from_str(candidate).map_err(|_| ApiError::JsonParse {
        raw: text.to_string(),
    })
}

/// Accept `value` only if it is an object whose `decision` is a string.
///
/// The object is returned untouched; other fields are not inspected.
pub fn validate_shape(value: Value, raw: &str) -> Result<Map<String, Value>, ApiError> {
    match value {
        Value::Object(map) if map.get("decision").is_some_and(Value::is_string) => Ok(map),
        _ => Err(ApiError::InvalidShape {
            raw: raw.to_string(),
        }),
    }
}

/// Run extraction, recovery and shape validation over one envelope.
pub fn decode_envelope(envelope: &Value) -> Result<Map<String, Value>, ApiError> {
    let text = extract_text(envelope);
    let value = recover_json(&text)?;
    validate_shape(value, &text)
}
