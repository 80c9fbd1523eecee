//! Put command implementation

use anyhow::{Context, Result};
use secrets_provider::prelude::*;

/// JSON if it parses, a plain string otherwise
fn parse_value(raw: &str) -> SecretValue {
    serde_json::from_str(raw).unwrap_or_else(|_| SecretValue::String(raw.to_string()))
}

pub async fn put_command(
    provider: &dyn SecretProvider,
    key: &str,
    raw_value: &str,
    client_request_token: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut options = RequestOptions::new();
    options.client_request_token = client_request_token;
    options.description = description;

    let secret = provider
        .put_secret(Secret::new(key, parse_value(raw_value)), options)
        .await
        .with_context(|| format!("Failed to put secret {key}"))?;

    println!("✅ Stored secret {}", secret.key());
    Ok(())
}
