//! Diagnostics go to stderr so they never interleave with the menu on stdout.
//! Configurable via the RUST_LOG environment variable (default `warn`).

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
