//! # Metrics
//!
//! Prometheus metrics for monitoring secret providers.
//!
//! ## Metrics Exposed
//!
//! - `secrets_provider_operations_total` - Store operations by provider and operation
//! - `secrets_provider_operation_duration_seconds` - Duration of store operations
//! - `secrets_provider_operation_errors_total` - Failed store operations
//! - `secrets_provider_cache_hits_total` - Reads served from the provider cache
//! - `secrets_provider_cache_misses_total` - Reads that went to the store
//! - `secrets_provider_create_fallbacks_total` - Upserts that fell back to create

use anyhow::{Context, Result};
use prometheus::{Encoder, HistogramVec, IntCounter, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static PROVIDER_OPERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secrets_provider_operations_total",
            "Total number of secret store operations by provider and operation",
        ),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATIONS_TOTAL metric - this should never happen")
});

static PROVIDER_OPERATION_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "secrets_provider_operation_duration_seconds",
            "Duration of secret store operations in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATION_DURATION metric - this should never happen")
});

static PROVIDER_OPERATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secrets_provider_operation_errors_total",
            "Total number of failed secret store operations by provider and operation",
        ),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATION_ERRORS_TOTAL metric - this should never happen")
});

static CACHE_HITS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secrets_provider_cache_hits_total",
        "Total number of secret reads served from the provider cache",
    )
    .expect("Failed to create CACHE_HITS_TOTAL metric - this should never happen")
});

static CACHE_MISSES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secrets_provider_cache_misses_total",
        "Total number of secret reads that went to the store",
    )
    .expect("Failed to create CACHE_MISSES_TOTAL metric - this should never happen")
});

static CREATE_FALLBACKS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secrets_provider_create_fallbacks_total",
            "Total number of upserts that created the secret after update reported not found",
        ),
        &["provider"],
    )
    .expect("Failed to create CREATE_FALLBACKS_TOTAL metric - this should never happen")
});

pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(PROVIDER_OPERATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_DURATION.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CACHE_HITS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CACHE_MISSES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CREATE_FALLBACKS_TOTAL.clone()))?;

    Ok(())
}

/// Render all registered metrics in the Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics output is not valid UTF-8")
}

pub fn record_secret_operation(provider: &str, operation: &str, duration: f64) {
    PROVIDER_OPERATIONS_TOTAL
        .with_label_values(&[provider, operation])
        .inc();
    PROVIDER_OPERATION_DURATION
        .with_label_values(&[provider, operation])
        .observe(duration);
}

pub fn increment_provider_operation_errors(provider: &str, operation: &str) {
    PROVIDER_OPERATION_ERRORS_TOTAL
        .with_label_values(&[provider, operation])
        .inc();
}

pub fn increment_cache_hits() {
    CACHE_HITS_TOTAL.inc();
}

pub fn increment_cache_misses() {
    CACHE_MISSES_TOTAL.inc();
}

pub fn increment_create_fallbacks(provider: &str) {
    CREATE_FALLBACKS_TOTAL.with_label_values(&[provider]).inc();
}
