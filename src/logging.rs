//! Diagnostic logging
//!
//! Installs a `tracing` subscriber writing to stderr so report output on
//! stdout stays clean. `RUST_LOG` takes precedence over the `-v` count.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default level
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global subscriber; later calls are ignored
pub fn init(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
