//! Logging setup
//!
//! Human-readable `tracing` output on stderr. The level defaults to
//! `info` and can be overridden with `RUST_LOG` (for example
//! `RUST_LOG=info_poo=debug` to see every button activation).

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber
///
/// # Errors
///
/// Fails if a global subscriber was already installed.
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
