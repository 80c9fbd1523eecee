//! # Secret
//!
//! A named secret: a unique key plus a structured value.
//!
//! Values are JSON values (`serde_json::Value`): null, booleans, numbers,
//! strings, ordered lists and ordered key/value maps. Map key order is kept
//! as written. A `Secret` cannot be changed once built; a new value means a
//! new `Secret`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Structured payload of a secret
pub type SecretValue = serde_json::Value;

/// Immutable key + value pair
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    key: String,
    value: SecretValue,
}

impl Secret {
    pub fn new(key: impl Into<String>, value: impl Into<SecretValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &SecretValue {
        &self.value
    }

    /// Look up a member of a mapping value
    ///
    /// Returns `None` when the value is not a mapping or the field is absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SecretValue> {
        self.value.as_object().and_then(|map| map.get(field))
    }

    /// Look up a member of a mapping value as a string
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(SecretValue::as_str)
    }

    #[must_use]
    pub fn into_parts(self) -> (String, SecretValue) {
        (self.key, self.value)
    }
}

/// Field-style access, `secret["username"]`
///
/// Like `serde_json::Value`, a missing field (or a non-mapping value)
/// yields `Value::Null` instead of panicking.
impl Index<&str> for Secret {
    type Output = SecretValue;

    fn index(&self, field: &str) -> &Self::Output {
        &self.value[field]
    }
}

// Secret values must never end up in logs through `{:?}`
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}
