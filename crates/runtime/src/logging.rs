//! Logging setup for compiled programs
//!
//! The runtime emits `tracing` events (debug on writes, warn on dropped
//! arguments and bad configuration). Nothing is printed unless a subscriber
//! is installed; generated entry points call [`init`] to get one that
//! writes to stderr, keeping stdout for program output.
//!
//! The filter comes from `VELOCITY_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "VELOCITY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `VELOCITY_LOG`, falling back to `warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber. Safe to call more than once.
///
/// Returns false if a global subscriber was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
