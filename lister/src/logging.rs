//! Logging initialisation
//!
//! Diagnostics go to stderr only. Stdout carries the listing and nothing else.

use std::io::IsTerminal;

use endpoint_lister_common::config::{LoggingConfig, DEFAULT_LOG_FILTER, LOG_LEVEL_ENV};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber using [`LoggingConfig::from_env`].
pub fn init() -> anyhow::Result<()> {
    init_with(&LoggingConfig::from_env())
}

/// Install the global subscriber with an explicit configuration.
///
/// Fails if a global subscriber is already installed. A deprecated variable
/// in `config` is reported once the subscriber is up.
pub fn init_with(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    if let Some(old_name) = config.deprecated_var {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            LOG_LEVEL_ENV
        );
    }
    Ok(())
}

/// Parse the configured directives, falling back to the default on bad input.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!(
            "invalid log filter '{}' ({}), using '{}'",
            config.filter, e, DEFAULT_LOG_FILTER
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}
