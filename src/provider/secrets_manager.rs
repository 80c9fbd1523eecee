//! # Secrets Manager Provider
//!
//! [`SecretProvider`] over any [`SecretStoreClient`].
//!
//! - `put_secret` is an upsert: `UpdateSecret` first, `CreateSecret` only when
//!   the store reports the secret does not exist. Both requests carry the same
//!   client request token, generated when the caller did not pass one.
//! - `get_secret` serves repeated reads from a cache owned by the provider.
//!   The first successful read of a key is kept for the provider's lifetime;
//!   `put_secret` and `delete_secret` leave the cache alone, so reads after a
//!   write through the same provider can be stale.
//! - `delete_secret` forwards to the store and awaits the result.
//!
//! The only error translated is not-found on read, which becomes
//! [`ProviderError::SecretNotFound`]. All other store errors pass through.

use super::cache::SecretCache;
use super::options::RequestOptions;
use super::token::generate_client_request_token;
use super::SecretProvider;
use crate::config::AwsConfig;
use crate::error::ProviderError;
use crate::observability::metrics;
use crate::secret::{Secret, SecretValue};
use crate::store::{
    AwsSecretsManagerClient, CreateSecretRequest, DeleteSecretRequest, GetSecretValueRequest,
    SecretStoreClient, StoreError, StoreOperation, UpdateSecretRequest,
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, Instrument};

/// Provider backed by AWS Secrets Manager
pub type AwsSecretsManagerProvider = SecretsManagerProvider<AwsSecretsManagerClient>;

pub struct SecretsManagerProvider<C> {
    client: C,
    cache: SecretCache,
}

impl<C> std::fmt::Debug for SecretsManagerProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManagerProvider")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManagerProvider {
    /// Build a provider talking to AWS Secrets Manager
    pub async fn from_config(config: &AwsConfig) -> Self {
        Self::new(AwsSecretsManagerClient::new(config).await)
    }
}

impl<C: SecretStoreClient> SecretsManagerProvider<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            cache: SecretCache::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether a read of `key` would be served from the cache
    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Run one store call, recording its duration or failure
    ///
    /// Not-found is an expected outcome and is counted as a completed operation.
    async fn observe<T>(
        &self,
        operation: StoreOperation,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        let start = Instant::now();
        let result = call.await;
        let provider = self.client.provider_name();

        match &result {
            Ok(_) | Err(StoreError::NotFound { .. }) => metrics::record_secret_operation(
                provider,
                operation.as_str(),
                start.elapsed().as_secs_f64(),
            ),
            Err(StoreError::Remote { .. }) => {
                metrics::increment_provider_operation_errors(provider, operation.as_str());
            }
        }

        result
    }
}

#[async_trait]
impl<C: SecretStoreClient> SecretProvider for SecretsManagerProvider<C> {
    async fn put_secret(
        &self,
        secret: Secret,
        options: RequestOptions,
    ) -> Result<Secret, ProviderError> {
        let provider = self.client.provider_name();
        let span = info_span!("secrets.put", secret.key = secret.key(), provider = provider);

        async move {
            let secret_string =
                serde_json::to_string(secret.value()).map_err(|source| ProviderError::Encode {
                    key: secret.key().to_string(),
                    source,
                })?;
            let client_request_token = options
                .client_request_token
                .clone()
                .unwrap_or_else(generate_client_request_token);

            let update = UpdateSecretRequest {
                secret_id: secret.key().to_string(),
                secret_string,
                client_request_token: Some(client_request_token),
                options,
            };

            match self
                .observe(
                    StoreOperation::UpdateSecret,
                    self.client.update_secret(update.clone()),
                )
                .await
            {
                Ok(response) => {
                    debug!(version_id = ?response.version_id, "Updated secret");
                }
                Err(e) if e.is_not_found() => {
                    info!("Secret does not exist, creating it");
                    metrics::increment_create_fallbacks(provider);

                    let UpdateSecretRequest {
                        secret_id,
                        secret_string,
                        client_request_token,
                        options,
                    } = update;
                    let create = CreateSecretRequest {
                        name: secret_id.clone(),
                        secret_id,
                        secret_string,
                        client_request_token,
                        options,
                    };

                    let response = self
                        .observe(
                            StoreOperation::CreateSecret,
                            self.client.create_secret(create),
                        )
                        .await?;
                    debug!(version_id = ?response.version_id, "Created secret");
                }
                Err(e) => return Err(e.into()),
            }

            Ok(secret)
        }
        .instrument(span)
        .await
    }

    async fn delete_secret(
        &self,
        secret: &Secret,
        options: RequestOptions,
    ) -> Result<(), ProviderError> {
        let span = info_span!(
            "secrets.delete",
            secret.key = secret.key(),
            provider = self.client.provider_name()
        );

        async move {
            let request = DeleteSecretRequest {
                secret_id: secret.key().to_string(),
                options,
            };

            let response = self
                .observe(
                    StoreOperation::DeleteSecret,
                    self.client.delete_secret(request),
                )
                .await?;
            info!(deletion_date = ?response.deletion_date, "Deleted secret");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn get_secret(
        &self,
        key: &str,
        options: RequestOptions,
    ) -> Result<Arc<Secret>, ProviderError> {
        if let Some(cached) = self.cache.get(key) {
            metrics::increment_cache_hits();
            debug!(secret.key = key, "Secret served from cache");
            return Ok(cached);
        }

        let span = info_span!(
            "secrets.get",
            secret.key = key,
            provider = self.client.provider_name()
        );

        async move {
            metrics::increment_cache_misses();

            let request = GetSecretValueRequest {
                secret_id: key.to_string(),
                options,
            };

            let response = match self
                .observe(
                    StoreOperation::GetSecretValue,
                    self.client.get_secret_value(request),
                )
                .await
            {
                Ok(response) => response,
                Err(e) if e.is_not_found() => {
                    return Err(ProviderError::SecretNotFound {
                        key: key.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            };

            let payload = response
                .secret_string
                .ok_or_else(|| ProviderError::MissingPayload {
                    key: key.to_string(),
                })?;
            let value: SecretValue =
                serde_json::from_str(&payload).map_err(|source| ProviderError::Decode {
                    key: key.to_string(),
                    source,
                })?;

            let secret = Arc::new(Secret::new(key, value));
            self.cache.insert(Arc::clone(&secret));
            debug!(version_id = ?response.version_id, "Fetched secret");

            Ok(secret)
        }
        .instrument(span)
        .await
    }
}
