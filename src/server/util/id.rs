//! Lenient decoding of upstream identifiers.
//!
//! The upstream API is not consistent about whether ids are JSON strings or numbers, so both
//! are accepted and normalized to a string. Empty strings are treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional id from a string or a number.
///
/// `null`, empty strings and values of any other JSON type decode to `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => Some(s),
        _ => None,
    };

    Ok(id.filter(|id| !id.is_empty()))
}
