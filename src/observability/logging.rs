//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence; otherwise the configured `LOG_LEVEL` applies
//! to this crate and `warn` to everything else (the AWS SDK is chatty at
//! `info`).

use crate::config::ProviderConfig;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Build the fallback filter directive from a log level
fn default_directive(log_level: &str) -> String {
    format!("warn,secrets_provider={0},secretctl={0}", log_level.to_lowercase())
}

pub fn init_tracing(config: &ProviderConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_enable_color)
        .with_writer(std::io::stderr);

    let result = if config.log_format.eq_ignore_ascii_case("compact") {
        builder.compact().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_lowercases_level() {
        assert_eq!(
            default_directive("DEBUG"),
            "warn,secrets_provider=debug,secretctl=debug"
        );
    }
}
