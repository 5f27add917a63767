//! # Structured Logging
//!
//! `tracing` subscriber setup for the `bitauth` binary. Output always goes
//! to stderr; stdout is reserved for command results (a SIN, a signature, a
//! PEM) so they can be piped.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `--log-level`
//! (or `BITAUTH_LOG`), e.g.:
//!
//! ```text
//! RUST_LOG=bitauth=debug,bitauth_protocol=trace
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Install the global subscriber. Fails on a malformed `default_level`
/// filter or when a subscriber is already installed.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("invalid log filter {:?}", default_level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.context("logging already initialized")?;

    tracing::debug!(?format, "logging initialized");
    Ok(())
}
