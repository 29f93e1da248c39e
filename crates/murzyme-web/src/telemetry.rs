//! Tracing subscriber setup shared by the server and CLI binaries.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. RUST_LOG wins over `default_filter`.
/// Output goes to stderr so CLI results on stdout stay clean.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(())
}
