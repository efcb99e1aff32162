//! Logging setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. `RUST_LOG` wins when set, otherwise the level follows the
//! number of `-v` flags.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "spendwise=warn",
        1 => "spendwise=info",
        2 => "spendwise=debug",
        _ => "spendwise=trace",
    }
}

/// Install the global subscriber, writing to stderr
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
