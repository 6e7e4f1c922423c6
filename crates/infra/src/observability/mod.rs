//! Tracing setup for the command-line front end
//!
//! Diagnostics go to stderr so that stdout carries only command output
//! (a token or an identifier) and stays pipeable. Verbosity follows
//! `RUST_LOG`; without it only warnings are shown.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber.
///
/// Calling it twice (as tests may) is harmless: the second install fails and
/// is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
