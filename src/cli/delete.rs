//! Delete command implementation

use anyhow::{Context, Result};
use secrets_provider::prelude::*;

pub async fn delete_command(
    provider: &dyn SecretProvider,
    key: &str,
    force: bool,
    recovery_window_days: Option<i64>,
) -> Result<()> {
    let mut options = RequestOptions::new();
    if force {
        options.force_delete_without_recovery = Some(true);
    }
    options.recovery_window_in_days = recovery_window_days;

    // Only the key is sent; the value is never read
    let secret = Secret::new(key, SecretValue::Null);
    provider
        .delete_secret(&secret, options)
        .await
        .with_context(|| format!("Failed to delete secret {key}"))?;

    println!("✅ Deleted secret {key}");
    Ok(())
}
