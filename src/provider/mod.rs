//! # Provider Modules
//!
//! The caller-facing secret provider interface and its implementation over a
//! remote [`SecretStoreClient`](crate::store::SecretStoreClient).
//!
//! - `secrets_manager`: upsert/read/delete logic with a per-instance read cache
//! - `cache`: the read cache
//! - `options`: per-request options merged into store requests
//! - `token`: client request token generation

use crate::error::ProviderError;
use crate::secret::Secret;
use async_trait::async_trait;
use std::sync::Arc;

pub mod cache;
pub mod options;
pub mod secrets_manager;
pub mod token;

pub use options::RequestOptions;
pub use secrets_manager::{AwsSecretsManagerProvider, SecretsManagerProvider};

/// Provider trait for secret stores
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Create or update a secret
    ///
    /// Returns the secret that was passed in once the store holds its value.
    async fn put_secret(
        &self,
        secret: Secret,
        options: RequestOptions,
    ) -> Result<Secret, ProviderError>;

    /// Delete a secret from the store
    async fn delete_secret(
        &self,
        secret: &Secret,
        options: RequestOptions,
    ) -> Result<(), ProviderError>;

    /// Get a secret by key
    ///
    /// Fails with [`ProviderError::SecretNotFound`] when the store has no such key.
    async fn get_secret(
        &self,
        key: &str,
        options: RequestOptions,
    ) -> Result<Arc<Secret>, ProviderError>;
}
