//! # Configuration
//!
//! Provider settings loaded from environment variables.
//!
//! All settings have sensible defaults and can be overridden via environment
//! variables. AWS credentials are optional: without static access keys the
//! AWS SDK default credential chain is used (IRSA, profile, instance role).

use crate::constants::{
    DEFAULT_AWS_REGION, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, ENV_AWS_ACCESS_KEY_ID,
    ENV_AWS_REGION, ENV_AWS_SECRETS_MANAGER_ENDPOINT, ENV_AWS_SECRET_ACCESS_KEY,
    ENV_AWS_SESSION_TOKEN,
};
use serde::{Deserialize, Serialize};

/// AWS configuration for Secrets Manager
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsConfig {
    pub region: String,
    /// Endpoint override (LocalStack, Pact mock server)
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub auth: Option<AwsAuthConfig>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_AWS_REGION.to_string(),
            endpoint_url: None,
            auth: None,
        }
    }
}

/// AWS authentication configuration
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "authType", rename_all_fields = "camelCase")]
pub enum AwsAuthConfig {
    /// Static access keys
    AccessKeys {
        access_key_id: String,
        secret_access_key: String,
        #[serde(default)]
        session_token: Option<String>,
    },
    /// IAM Roles for Service Accounts; resolved by the default credential chain
    Irsa { role_arn: String },
}

impl std::fmt::Debug for AwsAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwsAuthConfig::AccessKeys { access_key_id, .. } => f
                .debug_struct("AccessKeys")
                .field("access_key_id", access_key_id)
                .finish_non_exhaustive(),
            AwsAuthConfig::Irsa { role_arn } => {
                f.debug_struct("Irsa").field("role_arn", role_arn).finish()
            }
        }
    }
}

/// Process-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub aws: AwsConfig,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (text, compact)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            aws: AwsConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_enable_color: true,
            enable_metrics: true,
        }
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            aws: AwsConfig::from_env(),
            log_level: env_var_or_default_str("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: env_var_or_default_str("LOG_FORMAT", DEFAULT_LOG_FORMAT),
            log_enable_color: env_var_or_default_bool("LOG_ENABLE_COLOR", true),
            enable_metrics: env_var_or_default_bool("ENABLE_METRICS", true),
        }
    }
}

impl AwsConfig {
    /// Load AWS settings from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        let auth = match (
            env_var_opt(ENV_AWS_ACCESS_KEY_ID),
            env_var_opt(ENV_AWS_SECRET_ACCESS_KEY),
        ) {
            (Some(access_key_id), Some(secret_access_key)) => Some(AwsAuthConfig::AccessKeys {
                access_key_id,
                secret_access_key,
                session_token: env_var_opt(ENV_AWS_SESSION_TOKEN),
            }),
            _ => None,
        };

        Self {
            region: env_var_or_default_str(ENV_AWS_REGION, DEFAULT_AWS_REGION),
            endpoint_url: env_var_opt(ENV_AWS_SECRETS_MANAGER_ENDPOINT),
            auth,
        }
    }
}

/// Read environment variable, treating empty values as unset
fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |v| parse_bool(&v))
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_string())
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.aws.region, "us-east-1");
        assert!(config.aws.endpoint_url.is_none());
        assert!(config.aws.auth.is_none());
        assert_eq!(config.log_level, "INFO");
        assert!(config.enable_metrics);
    }

    #[test]
    fn test_parse_bool() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert!(parse_bool(value), "{value} should parse as true");
        }
        for value in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(value), "{value} should parse as false");
        }
    }

    #[test]
    fn test_aws_config_deserialize_access_keys() {
        let config: AwsConfig = serde_json::from_value(json!({
            "region": "eu-west-1",
            "endpointUrl": "http://localhost:4566",
            "auth": {
                "authType": "AccessKeys",
                "accessKeyId": "AKIDEXAMPLE",
                "secretAccessKey": "wJalrXUtnFEMI"
            }
        }))
        .unwrap();

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        match config.auth {
            Some(AwsAuthConfig::AccessKeys {
                access_key_id,
                session_token,
                ..
            }) => {
                assert_eq!(access_key_id, "AKIDEXAMPLE");
                assert!(session_token.is_none());
            }
            _ => panic!("Expected AccessKeys auth config"),
        }
    }

    #[test]
    fn test_aws_config_deserialize_irsa() {
        let config: AwsConfig = serde_json::from_value(json!({
            "region": "us-east-1",
            "auth": {"authType": "Irsa", "roleArn": "arn:aws:iam::123456789012:role/test-role"}
        }))
        .unwrap();

        assert_eq!(
            config.auth,
            Some(AwsAuthConfig::Irsa {
                role_arn: "arn:aws:iam::123456789012:role/test-role".to_string()
            })
        );
    }

    #[test]
    fn test_auth_debug_hides_secret_key() {
        let auth = AwsAuthConfig::AccessKeys {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "super-secret".to_string(),
            session_token: None,
        };
        let rendered = format!("{auth:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("super-secret"));
    }
}
