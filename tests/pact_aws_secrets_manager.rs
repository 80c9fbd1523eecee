//! Pact contract tests for the AWS Secrets Manager client
//!
//! These tests verify that `AwsSecretsManagerClient`, driven through the
//! provider, works with the AWS Secrets Manager JSON protocol by:
//! 1. Starting a Pact mock server
//! 2. Pointing the AWS SDK at the mock server endpoint with static credentials
//! 3. Calling the actual provider methods
//! 4. Verifying contracts are met (every interaction used, nothing unexpected)
//!
//! Request bodies are written in the order the SDK serializes members, so the
//! contract holds whether the mock server compares them as JSON or as text.

use pact_consumer::prelude::*;
use secrets_provider::prelude::*;
use serde_json::json;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const CLIENT_REQUEST_TOKEN: &str = "Yy9kTXpVcWtBbGRFYjBrV0xvbGpZc0pGcnVjM0txWk0=";

fn mock_server_config(mock_server: &dyn ValidatingMockServer) -> AwsConfig {
    let mut base_url = mock_server.url().to_string();
    if base_url.ends_with('/') {
        base_url.pop();
    }

    AwsConfig {
        region: "us-east-1".to_string(),
        endpoint_url: Some(base_url),
        auth: Some(AwsAuthConfig::AccessKeys {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
            session_token: None,
        }),
    }
}

#[tokio::test]
async fn test_get_secret_value_with_pact() {
    let mut pact_builder = PactBuilder::new("Secrets-Provider", "AWS-Secrets-Manager");

    pact_builder.interaction("get database secret value", "", |mut i| {
        i.given("the secret MyTestDatabaseSecret exists");
        i.request
            .method("POST")
            .path("/")
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", "secretsmanager.GetSecretValue")
            .body(json!({"SecretId": "MyTestDatabaseSecret"}).to_string());
        i.response
            .status(200)
            .header("content-type", AMZ_JSON)
            .json_body(json!({
                "ARN": "arn:aws:secretsmanager:us-west-2:123456789012:secret:MyTestDatabaseSecret-a1b2c3",
                "CreatedDate": 1_523_477_145.713,
                "Name": "MyTestDatabaseSecret",
                "SecretString": "{\"username\":\"test\",\"password\":\"testpass\"}",
                "VersionId": "EXAMPLE1-90ab-cdef-fedc-ba987SECRET1",
                "VersionStages": ["AWSPREVIOUS"]
            }));
        i
    });

    let mock_server = pact_builder.start_mock_server(None, None);
    let config = mock_server_config(mock_server.as_ref());
    let provider = AwsSecretsManagerProvider::from_config(&config).await;

    let secret = provider
        .get_secret("MyTestDatabaseSecret", RequestOptions::default())
        .await
        .expect("GetSecretValue should succeed");

    assert_eq!(
        secret.value(),
        &json!({"username": "test", "password": "testpass"})
    );
    assert_eq!(secret["username"], "test");

    // Served from cache; a second request would be an unexpected interaction
    let cached = provider
        .get_secret("MyTestDatabaseSecret", RequestOptions::default())
        .await
        .expect("cached read should succeed");
    assert!(std::sync::Arc::ptr_eq(&secret, &cached));
}

#[tokio::test]
async fn test_get_missing_secret_with_pact() {
    let mut pact_builder = PactBuilder::new("Secrets-Provider", "AWS-Secrets-Manager");

    pact_builder.interaction("get missing secret value", "", |mut i| {
        i.given("the secret does not exist");
        i.request
            .method("POST")
            .path("/")
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", "secretsmanager.GetSecretValue")
            .body(json!({"SecretId": "missing-secret"}).to_string());
        i.response
            .status(400)
            .header("content-type", AMZ_JSON)
            .json_body(json!({
                "__type": "ResourceNotFoundException",
                "message": "Secrets Manager can't find the specified secret."
            }));
        i
    });

    let mock_server = pact_builder.start_mock_server(None, None);
    let config = mock_server_config(mock_server.as_ref());
    let provider = AwsSecretsManagerProvider::from_config(&config).await;

    let err = provider
        .get_secret("missing-secret", RequestOptions::default())
        .await
        .expect_err("missing secret should fail");

    assert!(err.is_not_found(), "expected SecretNotFound, got {err}");
    assert_eq!(err.key(), "missing-secret");
}

#[tokio::test]
async fn test_put_secret_creates_after_update_not_found_with_pact() {
    let mut pact_builder = PactBuilder::new("Secrets-Provider", "AWS-Secrets-Manager");

    pact_builder.interaction("update missing secret", "", |mut i| {
        i.given("the secret test-key does not exist");
        i.request
            .method("POST")
            .path("/")
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", "secretsmanager.UpdateSecret")
            .body(
                json!({
                    "SecretId": "test-key",
                    "ClientRequestToken": CLIENT_REQUEST_TOKEN,
                    "SecretString": "\"value\""
                })
                .to_string(),
            );
        i.response
            .status(400)
            .header("content-type", AMZ_JSON)
            .json_body(json!({
                "__type": "ResourceNotFoundException",
                "message": "Secrets Manager can't find the specified secret."
            }));
        i
    });

    pact_builder.interaction("create secret after failed update", "", |mut i| {
        i.given("the secret test-key does not exist");
        i.request
            .method("POST")
            .path("/")
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", "secretsmanager.CreateSecret")
            .body(
                json!({
                    "Name": "test-key",
                    "ClientRequestToken": CLIENT_REQUEST_TOKEN,
                    "SecretString": "\"value\""
                })
                .to_string(),
            );
        i.response
            .status(200)
            .header("content-type", AMZ_JSON)
            .json_body(json!({
                "ARN": "arn:aws:secretsmanager:us-west-2:123456789012:secret:test-key-a1b2c3",
                "Name": "test-key",
                "VersionId": "EXAMPLE1-90ab-cdef-fedc-ba987SECRET1"
            }));
        i
    });

    let mock_server = pact_builder.start_mock_server(None, None);
    let config = mock_server_config(mock_server.as_ref());
    let provider = AwsSecretsManagerProvider::from_config(&config).await;

    let secret = Secret::new("test-key", "value");
    let returned = provider
        .put_secret(
            secret.clone(),
            RequestOptions::new().with_client_request_token(CLIENT_REQUEST_TOKEN),
        )
        .await
        .expect("upsert should fall back to create");

    assert_eq!(returned, secret);
}

#[tokio::test]
async fn test_delete_secret_with_pact() {
    let mut pact_builder = PactBuilder::new("Secrets-Provider", "AWS-Secrets-Manager");

    pact_builder.interaction("delete secret", "", |mut i| {
        i.given("the secret test-key exists");
        i.request
            .method("POST")
            .path("/")
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", "secretsmanager.DeleteSecret")
            .body(
                json!({
                    "SecretId": "test-key",
                    "ForceDeleteWithoutRecovery": true
                })
                .to_string(),
            );
        i.response
            .status(200)
            .header("content-type", AMZ_JSON)
            .json_body(json!({
                "ARN": "arn:aws:secretsmanager:us-west-2:123456789012:secret:test-key-a1b2c3",
                "Name": "test-key",
                "DeletionDate": 1_523_477_145.713
            }));
        i
    });

    let mock_server = pact_builder.start_mock_server(None, None);
    let config = mock_server_config(mock_server.as_ref());
    let provider = AwsSecretsManagerProvider::from_config(&config).await;

    provider
        .delete_secret(
            &Secret::new("test-key", "value"),
            RequestOptions::new().with_force_delete_without_recovery(true),
        )
        .await
        .expect("DeleteSecret should succeed");
}
