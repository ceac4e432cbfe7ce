//! Logging setup
//!
//! Installs a `tracing` subscriber for binaries and examples. `RUST_LOG`
//! overrides the given level when set.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging
///
/// # Arguments
/// * `level` - Default filter (e.g., "info", "shop_client=debug")
/// * `json_format` - JSON lines instead of the human-readable format
///
/// # Examples
/// ```no_run
/// shop_client::logger::init_logger("info", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init()?;
    }

    Ok(())
}
