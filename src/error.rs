//! # Errors
//!
//! Errors returned by secret providers.
//!
//! A provider translates exactly one store failure: "not found" on a read
//! becomes [`ProviderError::SecretNotFound`]. Every other store failure is
//! passed through as [`ProviderError::Store`] with the original error intact.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Secret not found: {key}")]
    SecretNotFound { key: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to encode value of secret {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode payload of secret {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Secret {key} has no string payload")]
    MissingPayload { key: String },
}

impl ProviderError {
    /// Check if this is the domain not-found error raised by reads
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::SecretNotFound { .. })
    }

    /// The store error behind this failure, if any
    #[must_use]
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            ProviderError::Store(e) => Some(e),
            _ => None,
        }
    }

    /// Key of the secret the failure relates to
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            ProviderError::SecretNotFound { key }
            | ProviderError::Encode { key, .. }
            | ProviderError::Decode { key, .. }
            | ProviderError::MissingPayload { key } => key,
            ProviderError::Store(e) => e.secret_id(),
        }
    }
}
