//! # Secret Stores
//!
//! The remote collaborator the provider talks to.
//!
//! A store exposes four operations mirroring the Secrets Manager API:
//! `CreateSecret`, `UpdateSecret`, `DeleteSecret` and `GetSecretValue`.
//! The only failure a store must classify is "the secret does not exist"
//! ([`StoreError::NotFound`]); everything else is [`StoreError::Remote`]
//! and carries the transport's own error as its source.
//!
//! Implementations:
//! - `aws`: AWS Secrets Manager through the official SDK
//! - `memory`: in-process store with a call journal, for tests and dry runs

use crate::provider::options::RequestOptions;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod aws;
pub mod memory;

pub use aws::AwsSecretsManagerClient;
pub use memory::{InMemorySecretStore, StoreCall};

/// Boxed transport error
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Remote store operation, used in errors, logs and metric labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    CreateSecret,
    UpdateSecret,
    DeleteSecret,
    GetSecretValue,
}

impl StoreOperation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::CreateSecret => "CreateSecret",
            StoreOperation::UpdateSecret => "UpdateSecret",
            StoreOperation::DeleteSecret => "DeleteSecret",
            StoreOperation::GetSecretValue => "GetSecretValue",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation}: secret {secret_id} not found")]
    NotFound {
        operation: StoreOperation,
        secret_id: String,
    },
    #[error("{operation} failed for secret {secret_id}: {source}")]
    Remote {
        operation: StoreOperation,
        secret_id: String,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn not_found(operation: StoreOperation, secret_id: impl Into<String>) -> Self {
        StoreError::NotFound {
            operation,
            secret_id: secret_id.into(),
        }
    }

    pub fn remote(
        operation: StoreOperation,
        secret_id: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        StoreError::Remote {
            operation,
            secret_id: secret_id.into(),
            source: source.into(),
        }
    }

    /// The store reported that the secret does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    #[must_use]
    pub fn operation(&self) -> StoreOperation {
        match self {
            StoreError::NotFound { operation, .. } | StoreError::Remote { operation, .. } => {
                *operation
            }
        }
    }

    #[must_use]
    pub fn secret_id(&self) -> &str {
        match self {
            StoreError::NotFound { secret_id, .. } | StoreError::Remote { secret_id, .. } => {
                secret_id
            }
        }
    }
}

/// `CreateSecret` request
///
/// Carries `name` in addition to `secret_id`; the create and update request
/// shapes differ in the remote API.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSecretRequest {
    pub name: String,
    pub secret_id: String,
    pub secret_string: String,
    pub client_request_token: Option<String>,
    pub options: RequestOptions,
}

/// `UpdateSecret` request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSecretRequest {
    pub secret_id: String,
    pub secret_string: String,
    pub client_request_token: Option<String>,
    pub options: RequestOptions,
}

/// `DeleteSecret` request
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteSecretRequest {
    pub secret_id: String,
    pub options: RequestOptions,
}

/// `GetSecretValue` request
#[derive(Debug, Clone, PartialEq)]
pub struct GetSecretValueRequest {
    pub secret_id: String,
    pub options: RequestOptions,
}

/// Result of `CreateSecret` / `UpdateSecret`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteSecretResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
}

/// Result of `DeleteSecret`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteSecretResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    /// Scheduled deletion time, seconds since the Unix epoch
    pub deletion_date: Option<i64>,
}

/// Result of `GetSecretValue`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSecretValueResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
    /// Encoded payload; `None` for binary-only secrets
    pub secret_string: Option<String>,
}

/// Remote secret store contract
#[async_trait]
pub trait SecretStoreClient: Send + Sync {
    /// Short label for logs and metrics (e.g., "aws", "memory")
    fn provider_name(&self) -> &'static str;

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError>;

    /// Must fail with [`StoreError::NotFound`] when `secret_id` does not exist
    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError>;

    /// Resolves once the store has accepted the deletion
    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, StoreError>;

    /// Must fail with [`StoreError::NotFound`] when `secret_id` does not exist
    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, StoreError>;
}

#[async_trait]
impl<T: SecretStoreClient + ?Sized> SecretStoreClient for std::sync::Arc<T> {
    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        (**self).create_secret(request).await
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        (**self).update_secret(request).await
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, StoreError> {
        (**self).delete_secret(request).await
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, StoreError> {
        (**self).get_secret_value(request).await
    }
}
