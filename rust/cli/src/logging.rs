//! Subscriber setup for the `pineapple` binary.
//!
//! Engine events go to stderr through a `tracing-subscriber` fmt layer.
//! `RUST_LOG` takes precedence; otherwise `-v` picks the level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter directive for a `-v` count when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr fmt subscriber. `RUST_LOG` wins over `verbosity`.
/// A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
