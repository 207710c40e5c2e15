//! Tracing/logging setup shared by binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Emit the restart divider.
///
/// One line per level so every level-filtered sink shows where the
/// previous run ended.
pub fn restart_divider() {
    tracing::error!("=============================================");
    tracing::warn!("=============================================");
    tracing::info!("=============================================");
    tracing::debug!("=============================================");
}
