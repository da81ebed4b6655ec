//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr so command output on stdout stays pipeable.
//! `SLUGWARD_LOG` takes an `EnvFilter` directive and overrides the
//! default level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "SLUGWARD_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("slugward={default_level}")));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
