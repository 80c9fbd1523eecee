//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use secrets_provider::prelude::*;
//! ```

// Secret data model
pub use crate::secret::{Secret, SecretValue};

// Provider trait and implementations
pub use crate::provider::{
    AwsSecretsManagerProvider, RequestOptions, SecretProvider, SecretsManagerProvider,
};

// Store contract and clients
pub use crate::store::{
    AwsSecretsManagerClient, InMemorySecretStore, SecretStoreClient, StoreError, StoreOperation,
};

// Config types
pub use crate::config::{AwsAuthConfig, AwsConfig, ProviderConfig};

// Common error types
pub use crate::error::ProviderError;
