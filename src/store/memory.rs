//! # In-Memory Secret Store
//!
//! In-process [`SecretStoreClient`] for tests and dry runs.
//!
//! - Secrets live in a `HashMap<secret_id, StoredSecret>`
//! - Every call is journaled with its full request, so tests can assert on
//!   exactly what the provider sent
//! - A one-shot failure can be armed per operation with [`InMemorySecretStore::fail_next`]
//!
//! This is ephemeral - data does not persist across restarts.
//! Thread-safe using Arc<RwLock> for concurrent access.

use super::{
    CreateSecretRequest, DeleteSecretRequest, DeleteSecretResponse, GetSecretValueRequest,
    GetSecretValueResponse, SecretStoreClient, StoreError, StoreOperation, UpdateSecretRequest,
    WriteSecretResponse,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Region used to build ARNs for stored secrets
const MEMORY_ARN_PREFIX: &str = "arn:aws:secretsmanager:local:000000000000:secret";

/// A journaled store call
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(CreateSecretRequest),
    Update(UpdateSecretRequest),
    Delete(DeleteSecretRequest),
    GetValue(GetSecretValueRequest),
}

impl StoreCall {
    #[must_use]
    pub fn operation(&self) -> StoreOperation {
        match self {
            StoreCall::Create(_) => StoreOperation::CreateSecret,
            StoreCall::Update(_) => StoreOperation::UpdateSecret,
            StoreCall::Delete(_) => StoreOperation::DeleteSecret,
            StoreCall::GetValue(_) => StoreOperation::GetSecretValue,
        }
    }
}

/// Failures the in-memory store raises on its own
#[derive(Debug, Error)]
pub enum MemoryStoreError {
    #[error("secret {0} already exists")]
    AlreadyExists(String),
}

#[derive(Debug, Clone)]
struct StoredSecret {
    secret_string: String,
    version_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySecretStore {
    secrets: Arc<RwLock<HashMap<String, StoredSecret>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failures: Arc<Mutex<HashMap<StoreOperation, StoreError>>>,
    versions: Arc<AtomicU64>,
}

impl InMemorySecretStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `(secret_id, secret_string)` pairs
    pub fn with_secrets<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        let seeded = entries
            .into_iter()
            .map(|(id, payload)| {
                (
                    id.into(),
                    StoredSecret {
                        secret_string: payload.into(),
                        version_id: store.next_version_id(),
                    },
                )
            })
            .collect();
        Self {
            secrets: Arc::new(RwLock::new(seeded)),
            ..store
        }
    }

    /// Store a payload directly, bypassing the journal
    pub async fn insert(&self, secret_id: impl Into<String>, secret_string: impl Into<String>) {
        let version_id = self.next_version_id();
        self.secrets.write().await.insert(
            secret_id.into(),
            StoredSecret {
                secret_string: secret_string.into(),
                version_id,
            },
        );
    }

    /// Current payload of a secret, bypassing the journal
    pub async fn secret_string(&self, secret_id: &str) -> Option<String> {
        self.secrets
            .read()
            .await
            .get(secret_id)
            .map(|stored| stored.secret_string.clone())
    }

    pub async fn contains(&self, secret_id: &str) -> bool {
        self.secrets.read().await.contains_key(secret_id)
    }

    /// Snapshot of every call made so far, oldest first
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().await.clone()
    }

    /// Number of calls made for one operation
    pub async fn call_count(&self, operation: StoreOperation) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    pub async fn clear_calls(&self) {
        self.calls.lock().await.clear();
    }

    /// Make the next call of `operation` fail with `error`
    pub async fn fail_next(&self, operation: StoreOperation, error: StoreError) {
        self.failures.lock().await.insert(operation, error);
    }

    fn next_version_id(&self) -> String {
        let n = self.versions.fetch_add(1, Ordering::Relaxed) + 1;
        format!("v{n}")
    }

    fn arn(secret_id: &str) -> String {
        format!("{MEMORY_ARN_PREFIX}:{secret_id}")
    }

    async fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        let operation = call.operation();
        self.calls.lock().await.push(call);
        match self.failures.lock().await.remove(&operation) {
            Some(error) => {
                debug!(operation = %operation, "in-memory store returning injected failure");
                Err(error)
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SecretStoreClient for InMemorySecretStore {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        self.record(StoreCall::Create(request.clone())).await?;

        let mut secrets = self.secrets.write().await;
        if secrets.contains_key(&request.name) {
            return Err(StoreError::remote(
                StoreOperation::CreateSecret,
                &request.name,
                MemoryStoreError::AlreadyExists(request.name.clone()),
            ));
        }

        let version_id = self.next_version_id();
        secrets.insert(
            request.name.clone(),
            StoredSecret {
                secret_string: request.secret_string,
                version_id: version_id.clone(),
            },
        );

        Ok(WriteSecretResponse {
            arn: Some(Self::arn(&request.name)),
            name: Some(request.name),
            version_id: Some(version_id),
        })
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        self.record(StoreCall::Update(request.clone())).await?;

        let mut secrets = self.secrets.write().await;
        let Some(stored) = secrets.get_mut(&request.secret_id) else {
            return Err(StoreError::not_found(
                StoreOperation::UpdateSecret,
                request.secret_id,
            ));
        };

        stored.secret_string = request.secret_string;
        stored.version_id = self.next_version_id();

        Ok(WriteSecretResponse {
            arn: Some(Self::arn(&request.secret_id)),
            version_id: Some(stored.version_id.clone()),
            name: Some(request.secret_id),
        })
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, StoreError> {
        self.record(StoreCall::Delete(request.clone())).await?;

        if self.secrets.write().await.remove(&request.secret_id).is_none() {
            return Err(StoreError::not_found(
                StoreOperation::DeleteSecret,
                request.secret_id,
            ));
        }

        Ok(DeleteSecretResponse {
            arn: Some(Self::arn(&request.secret_id)),
            name: Some(request.secret_id),
            deletion_date: None,
        })
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, StoreError> {
        self.record(StoreCall::GetValue(request.clone())).await?;

        let secrets = self.secrets.read().await;
        let Some(stored) = secrets.get(&request.secret_id) else {
            return Err(StoreError::not_found(
                StoreOperation::GetSecretValue,
                request.secret_id,
            ));
        };

        Ok(GetSecretValueResponse {
            arn: Some(Self::arn(&request.secret_id)),
            version_id: Some(stored.version_id.clone()),
            secret_string: Some(stored.secret_string.clone()),
            name: Some(request.secret_id),
        })
    }
}
