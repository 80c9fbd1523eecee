//! # AWS Secrets Manager Client
//!
//! [`SecretStoreClient`] over the official AWS SDK.
//!
//! This module provides functionality to:
//! - Create and update secrets in AWS Secrets Manager
//! - Retrieve secret values
//! - Delete secrets, with or without a recovery window
//!
//! `ResourceNotFoundException` is the only error classified; every other SDK
//! error is returned as [`StoreError::Remote`] with the SDK error as source.

mod auth;

pub use auth::create_sdk_config;

use super::{
    CreateSecretRequest, DeleteSecretRequest, DeleteSecretResponse, GetSecretValueRequest,
    GetSecretValueResponse, SecretStoreClient, StoreError, StoreOperation, UpdateSecretRequest,
    WriteSecretResponse,
};
use crate::config::AwsConfig;
use crate::provider::options::RequestOptions;
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, SdkError};
use aws_sdk_secretsmanager::types::Tag;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::{debug, warn};

/// AWS Secrets Manager store client
#[derive(Clone)]
pub struct AwsSecretsManagerClient {
    client: SecretsManagerClient,
    region: Option<String>,
}

impl std::fmt::Debug for AwsSecretsManagerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerClient")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManagerClient {
    /// Create a new AWS Secrets Manager client
    /// Supports static access keys, IRSA and the default credential chain
    pub async fn new(config: &AwsConfig) -> Self {
        let sdk_config = create_sdk_config(config).await;
        Self::from_sdk_config(&sdk_config)
    }

    #[must_use]
    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SecretsManagerClient::new(sdk_config),
            region: sdk_config.region().map(ToString::to_string),
        }
    }

    /// Wrap an already configured SDK client
    #[must_use]
    pub fn from_client(client: SecretsManagerClient) -> Self {
        let region = client.config().region().map(ToString::to_string);
        Self { client, region }
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Typed options each SDK request has a field for
fn supported_options(operation: StoreOperation) -> &'static [&'static str] {
    match operation {
        StoreOperation::CreateSecret => &["clientRequestToken", "description", "kmsKeyId", "tags"],
        StoreOperation::UpdateSecret => &["clientRequestToken", "description", "kmsKeyId"],
        StoreOperation::DeleteSecret => &["recoveryWindowInDays", "forceDeleteWithoutRecovery"],
        StoreOperation::GetSecretValue => &["versionId", "versionStage"],
    }
}

/// Options set by the caller that `operation` cannot send
fn unsupported_options(operation: StoreOperation, options: &RequestOptions) -> Vec<&str> {
    let supported = supported_options(operation);
    options
        .set_fields()
        .into_iter()
        .filter(|field| !supported.contains(field))
        .chain(options.extra.keys().map(String::as_str))
        .collect()
}

/// The SDK request shapes are closed; options they have no field for are dropped
fn warn_unsupported_options(operation: StoreOperation, options: &RequestOptions) {
    for key in unsupported_options(operation, options) {
        warn!(
            provider = "aws",
            operation = %operation,
            option = %key,
            "Ignoring option not supported by the AWS Secrets Manager client"
        );
    }
}

/// Classify an SDK error
fn map_sdk_error<E, R>(
    operation: StoreOperation,
    secret_id: &str,
    err: SdkError<E, R>,
    is_not_found: impl FnOnce(&E) -> bool,
) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if err.as_service_error().is_some_and(is_not_found) {
        debug!(
            provider = "aws",
            operation = %operation,
            secret_id = secret_id,
            "AWS secret not found"
        );
        return StoreError::not_found(operation, secret_id);
    }

    warn!(
        provider = "aws",
        operation = %operation,
        secret_id = secret_id,
        error = %DisplayErrorContext(&err),
        "AWS Secrets Manager request failed"
    );
    StoreError::remote(operation, secret_id, err)
}

#[async_trait]
impl SecretStoreClient for AwsSecretsManagerClient {
    fn provider_name(&self) -> &'static str {
        "aws"
    }

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        // CreateSecret addresses the secret by `Name`
        let CreateSecretRequest {
            name,
            secret_string,
            client_request_token,
            options,
            ..
        } = request;
        warn_unsupported_options(StoreOperation::CreateSecret, &options);

        let mut create_request = self
            .client
            .create_secret()
            .name(&name)
            .secret_string(secret_string)
            .set_client_request_token(client_request_token)
            .set_description(options.description)
            .set_kms_key_id(options.kms_key_id);

        for (key, value) in options.tags {
            create_request = create_request.tags(Tag::builder().key(key).value(value).build());
        }

        let output = create_request.send().await.map_err(|e| {
            // CreateSecret has no not-found outcome the provider can act on
            map_sdk_error(StoreOperation::CreateSecret, &name, e, |_| false)
        })?;

        Ok(WriteSecretResponse {
            arn: output.arn().map(ToString::to_string),
            name: output.name().map(ToString::to_string),
            version_id: output.version_id().map(ToString::to_string),
        })
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<WriteSecretResponse, StoreError> {
        let UpdateSecretRequest {
            secret_id,
            secret_string,
            client_request_token,
            options,
        } = request;
        warn_unsupported_options(StoreOperation::UpdateSecret, &options);

        let output = self
            .client
            .update_secret()
            .secret_id(&secret_id)
            .secret_string(secret_string)
            .set_client_request_token(client_request_token)
            .set_description(options.description)
            .set_kms_key_id(options.kms_key_id)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(StoreOperation::UpdateSecret, &secret_id, e, |service| {
                    service.is_resource_not_found_exception()
                })
            })?;

        Ok(WriteSecretResponse {
            arn: output.arn().map(ToString::to_string),
            name: output.name().map(ToString::to_string),
            version_id: output.version_id().map(ToString::to_string),
        })
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, StoreError> {
        let DeleteSecretRequest { secret_id, options } = request;
        warn_unsupported_options(StoreOperation::DeleteSecret, &options);

        let output = self
            .client
            .delete_secret()
            .secret_id(&secret_id)
            .set_recovery_window_in_days(options.recovery_window_in_days)
            .set_force_delete_without_recovery(options.force_delete_without_recovery)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(StoreOperation::DeleteSecret, &secret_id, e, |service| {
                    service.is_resource_not_found_exception()
                })
            })?;

        Ok(DeleteSecretResponse {
            arn: output.arn().map(ToString::to_string),
            name: output.name().map(ToString::to_string),
            deletion_date: output.deletion_date().map(|date| date.secs()),
        })
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, StoreError> {
        let GetSecretValueRequest { secret_id, options } = request;
        warn_unsupported_options(StoreOperation::GetSecretValue, &options);

        let output = self
            .client
            .get_secret_value()
            .secret_id(&secret_id)
            .set_version_id(options.version_id)
            .set_version_stage(options.version_stage)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(StoreOperation::GetSecretValue, &secret_id, e, |service| {
                    service.is_resource_not_found_exception()
                })
            })?;

        Ok(GetSecretValueResponse {
            arn: output.arn().map(ToString::to_string),
            name: output.name().map(ToString::to_string),
            version_id: output.version_id().map(ToString::to_string),
            secret_string: output.secret_string().map(ToString::to_string),
        })
    }
}
