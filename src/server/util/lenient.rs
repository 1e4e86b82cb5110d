//! Best-effort decoding of upstream fields.
//!
//! Upstream records are loosely typed. A field whose value has an unexpected JSON type decodes
//! to `None` instead of failing the whole record, and with it the whole collection.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Deserializes an optional field, treating a value of the wrong shape as absent.
///
/// Use with `#[serde(default, deserialize_with = "lenient::deserialize")]`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}
