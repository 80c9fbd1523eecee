//! Secrets Provider Library
//!
//! A uniform interface for storing, retrieving and deleting named secrets,
//! backed by AWS Secrets Manager.
//!
//! - `put_secret` upserts: update first, create when the store reports the
//!   secret does not exist
//! - `get_secret` caches every successful read for the provider's lifetime
//! - `delete_secret` forwards to the store
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use secrets_provider::prelude::*;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), ProviderError> {
//! let provider = AwsSecretsManagerProvider::from_config(&AwsConfig::from_env()).await;
//!
//! provider
//!     .put_secret(
//!         Secret::new("db", json!({"username": "app", "password": "s3cret"})),
//!         RequestOptions::default(),
//!     )
//!     .await?;
//!
//! let secret = provider.get_secret("db", RequestOptions::default()).await?;
//! assert_eq!(secret["username"], "app");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod secret;
pub mod store;
