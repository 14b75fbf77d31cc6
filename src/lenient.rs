//! Lenient field decoding
//!
//! Komga instances drift across versions, and descriptive fields are the
//! ones that drift. These combinators decode a field by buffering the raw
//! JSON value first, then converting; a mismatch substitutes the documented
//! default instead of failing the whole record. Identity fields stay on the
//! strict derive path and never go through here.
//!
//! Combine with `#[serde(default)]` so an absent field takes the same
//! default as a malformed one.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a descriptive field, substituting `T::default()` when the value
/// is null or of the wrong type.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match T::deserialize(value) {
        Ok(decoded) => Ok(decoded),
        Err(err) => {
            tracing::debug!("substituting default for malformed field: {err}");
            Ok(T::default())
        }
    }
}

/// Decode an optional field, mapping null or malformed values to `None`.
pub(crate) fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decode a flag that reads as `true` unless the input is literally `false`.
pub(crate) fn or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

/// `#[serde(default = ...)]` hook matching [`or_true`].
pub(crate) fn default_true() -> bool {
    true
}
