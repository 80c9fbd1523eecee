//! # AWS Secrets Manager Authentication
//!
//! Handles AWS SDK configuration and authentication setup.

use crate::config::{AwsAuthConfig, AwsConfig};
use crate::constants::STATIC_CREDENTIALS_PROVIDER_NAME;
use aws_config::SdkConfig;
use aws_credential_types::Credentials;
use tracing::info;

/// Create AWS SDK config based on authentication method
///
/// - `AccessKeys`: static credentials registered on the loader
/// - `Irsa` / none: the SDK default credential chain, which discovers the
///   role from the pod's service account token when running in EKS
///
/// The endpoint override is applied before `load()` so every client built
/// from this config talks to it.
pub async fn create_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        info!(endpoint = %endpoint, "Using AWS Secrets Manager endpoint override");
        builder = builder.endpoint_url(endpoint);
    }

    match &config.auth {
        Some(AwsAuthConfig::AccessKeys {
            access_key_id,
            secret_access_key,
            session_token,
        }) => {
            info!(access_key_id = %access_key_id, "Using static AWS access keys");
            builder = builder.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                STATIC_CREDENTIALS_PROVIDER_NAME,
            ));
        }
        Some(AwsAuthConfig::Irsa { role_arn }) => {
            info!(
                "IRSA authentication: Ensure pod service account has annotation: eks.amazonaws.com/role-arn={}",
                role_arn
            );
        }
        None => {
            info!("No auth configuration specified, using the default AWS credential chain");
        }
    }

    builder.load().await
}
