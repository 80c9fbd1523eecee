//! # secretctl
//!
//! Command-line interface over the secret provider.
//!
//! ## Usage
//!
//! ```bash
//! # Read a secret (prints the value as JSON)
//! secretctl get db
//!
//! # Read a single field of a mapping secret
//! secretctl get db --field username
//!
//! # Create or update a secret (VALUE is parsed as JSON, else stored as a string)
//! secretctl put db '{"username":"app","password":"s3cret"}'
//!
//! # Delete a secret immediately
//! secretctl delete db --force
//!
//! # Try commands without AWS
//! secretctl --backend memory put db '"value"'
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use secrets_provider::config::ProviderConfig;
use secrets_provider::observability::{init_tracing, metrics};
use secrets_provider::prelude::*;
use tracing::debug;

mod delete;
mod get;
mod put;

/// Secrets provider CLI
#[derive(Parser)]
#[command(name = "secretctl")]
#[command(about = "Read, write and delete secrets in AWS Secrets Manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// AWS region (defaults to AWS_REGION, then us-east-1)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Secrets Manager endpoint override (defaults to AWS_SECRETS_MANAGER_ENDPOINT)
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Store backend
    #[arg(long, value_enum, default_value_t = Backend::Aws, global = true)]
    backend: Backend,

    /// Print Prometheus metrics to stderr before exiting
    #[arg(long, global = true)]
    print_metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a secret as JSON
    Get {
        /// Secret key
        #[arg(value_name = "KEY")]
        key: String,

        /// Print only this field of a mapping value
        #[arg(long)]
        field: Option<String>,

        /// Staging label to read (e.g. AWSPREVIOUS)
        #[arg(long)]
        version_stage: Option<String>,
    },
    /// Create or update a secret
    Put {
        /// Secret key
        #[arg(value_name = "KEY")]
        key: String,

        /// Secret value; parsed as JSON, stored as a plain string otherwise
        #[arg(value_name = "VALUE")]
        value: String,

        /// Idempotency token (generated when omitted)
        #[arg(long)]
        client_request_token: Option<String>,

        /// Secret description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a secret
    Delete {
        /// Secret key
        #[arg(value_name = "KEY")]
        key: String,

        /// Delete immediately, without a recovery window
        #[arg(long, conflicts_with = "recovery_window_days")]
        force: bool,

        /// Days the secret stays recoverable (7-30)
        #[arg(long, value_parser = clap::value_parser!(i64).range(7..=30))]
        recovery_window_days: Option<i64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// AWS Secrets Manager
    Aws,
    /// In-process store, discarded on exit
    Memory,
}

async fn build_provider(cli: &Cli, config: &ProviderConfig) -> Box<dyn SecretProvider> {
    match cli.backend {
        Backend::Aws => {
            let mut aws = config.aws.clone();
            if let Some(region) = &cli.region {
                aws.region.clone_from(region);
            }
            if let Some(endpoint) = &cli.endpoint_url {
                aws.endpoint_url = Some(endpoint.clone());
            }
            debug!(region = %aws.region, endpoint = ?aws.endpoint_url, "Using AWS backend");
            Box::new(AwsSecretsManagerProvider::from_config(&aws).await)
        }
        Backend::Memory => {
            debug!("Using in-memory backend");
            Box::new(SecretsManagerProvider::new(InMemorySecretStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ProviderConfig::from_env();
    init_tracing(&config)?;

    let cli = Cli::parse();

    if config.enable_metrics {
        metrics::register_metrics()?;
    }

    let provider = build_provider(&cli, &config).await;

    let result = match cli.command {
        Commands::Get {
            ref key,
            ref field,
            ref version_stage,
        } => get::get_command(provider.as_ref(), key, field.as_deref(), version_stage.clone()).await,
        Commands::Put {
            ref key,
            ref value,
            ref client_request_token,
            ref description,
        } => {
            put::put_command(
                provider.as_ref(),
                key,
                value,
                client_request_token.clone(),
                description.clone(),
            )
            .await
        }
        Commands::Delete {
            ref key,
            force,
            recovery_window_days,
        } => delete::delete_command(provider.as_ref(), key, force, recovery_window_days).await,
    };

    if cli.print_metrics && config.enable_metrics {
        eprintln!("{}", metrics::gather_metrics()?);
    }

    result
}
