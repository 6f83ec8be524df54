//! Logging setup
//!
//! Diagnostics go to stderr so they never interleave with game output on
//! stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing with a default filter such as `"warn"` or `"debug"`
///
/// `RUST_LOG`, when set, takes precedence over `default_filter`.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
