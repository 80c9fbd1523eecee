//! Get command implementation

use anyhow::{anyhow, Context, Result};
use secrets_provider::prelude::*;

pub async fn get_command(
    provider: &dyn SecretProvider,
    key: &str,
    field: Option<&str>,
    version_stage: Option<String>,
) -> Result<()> {
    let mut options = RequestOptions::new();
    options.version_stage = version_stage;

    let secret = provider
        .get_secret(key, options)
        .await
        .with_context(|| format!("Failed to get secret {key}"))?;

    let value = match field {
        Some(field) => secret
            .get(field)
            .ok_or_else(|| anyhow!("Secret {key} has no field {field}"))?,
        None => secret.value(),
    };

    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render secret value")?
    );
    Ok(())
}
