//! # Request Options
//!
//! Caller-supplied settings merged into outgoing store requests.
//!
//! The fields the remote transport understands are typed. Anything else goes
//! into `extra`, which is passed through to the store client untouched. The
//! provider itself only ever sets the secret id, name, payload and client
//! request token; all other fields are the caller's.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// Idempotency token for create and update; generated when absent
    #[serde(default)]
    pub client_request_token: Option<String>,
    /// Create and update only
    #[serde(default)]
    pub description: Option<String>,
    /// Create and update only
    #[serde(default)]
    pub kms_key_id: Option<String>,
    /// Version to read (get only)
    #[serde(default)]
    pub version_id: Option<String>,
    /// Staging label to read, e.g. `AWSCURRENT` (get only)
    #[serde(default)]
    pub version_stage: Option<String>,
    /// Delete only
    #[serde(default)]
    pub recovery_window_in_days: Option<i64>,
    /// Delete only
    #[serde(default)]
    pub force_delete_without_recovery: Option<bool>,
    /// Create only
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Keys the typed fields do not cover
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    #[must_use]
    pub fn with_version_stage(mut self, version_stage: impl Into<String>) -> Self {
        self.version_stage = Some(version_stage.into());
        self
    }

    #[must_use]
    pub fn with_recovery_window_in_days(mut self, days: i64) -> Self {
        self.recovery_window_in_days = Some(days);
        self
    }

    #[must_use]
    pub fn with_force_delete_without_recovery(mut self, force: bool) -> Self {
        self.force_delete_without_recovery = Some(force);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Serialized names of the typed fields that are set, in declaration order
    #[must_use]
    pub fn set_fields(&self) -> Vec<&'static str> {
        [
            ("clientRequestToken", self.client_request_token.is_some()),
            ("description", self.description.is_some()),
            ("kmsKeyId", self.kms_key_id.is_some()),
            ("versionId", self.version_id.is_some()),
            ("versionStage", self.version_stage.is_some()),
            ("recoveryWindowInDays", self.recovery_window_in_days.is_some()),
            (
                "forceDeleteWithoutRecovery",
                self.force_delete_without_recovery.is_some(),
            ),
            ("tags", !self.tags.is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// Escape hatch for transport settings without a typed field
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
