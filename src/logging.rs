//! Logging initialisation
//!
//! Installs a `tracing-subscriber` fmt layer on stderr so command output on
//! stdout stays machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING_INIT: Once = Once::new();

/// Filter directive for a `-v` count, falling back to the configured level
pub fn level_for_verbosity(verbosity: u8, default_level: &str) -> &str {
    match verbosity {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; later calls are no-ops
///
/// `RUST_LOG` takes precedence over both the verbosity and the default level.
pub fn init_logging(verbosity: u8, default_level: &str) {
    let level = level_for_verbosity(verbosity, default_level).to_string();

    LOGGING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init();
    });
}
