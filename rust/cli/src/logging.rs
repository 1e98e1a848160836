//! Diagnostic logging for the `tablestakes` binary.
//!
//! Hand histories go to JSONL files; this is only the `tracing` output,
//! written to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TABLESTAKES_LOG";

pub const DEFAULT_FILTER: &str = "warn,tablestakes_engine=info";

/// Filter from `TABLESTAKES_LOG`, or [`DEFAULT_FILTER`] when unset or invalid.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber. A second call leaves the first in place.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
