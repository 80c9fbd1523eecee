//! # Constants
//!
//! Shared constants: defaults and environment variable names.

/// Default AWS region when `AWS_REGION` is unset
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (text, compact)
pub const DEFAULT_LOG_FORMAT: &str = "text";

pub const ENV_AWS_REGION: &str = "AWS_REGION";

/// Endpoint override for Secrets Manager (LocalStack, Pact mock server)
pub const ENV_AWS_SECRETS_MANAGER_ENDPOINT: &str = "AWS_SECRETS_MANAGER_ENDPOINT";

pub const ENV_AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Name of the static credentials provider registered with the AWS SDK
pub const STATIC_CREDENTIALS_PROVIDER_NAME: &str = "secrets-provider-static";
