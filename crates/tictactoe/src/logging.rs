//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `log_filter` applies.
//! Both initializers use `try_init`, so a second call is a no-op.

use crate::Config;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to the configured file with ANSI disabled, for when the UI owns the terminal.
pub fn init_file(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
