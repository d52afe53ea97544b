//! Tracing setup for the `detox` harness.
//!
//! Per-affliction decisions are logged at `debug`, treatment outcomes at
//! `info`, and missing health records or failed notices at `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at `warn`, so harness output on stdout stays clean
///
/// `RUST_LOG=debug` shows every classification decision.
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber with a fallback filter used when RUST_LOG is unset
///
/// Logs go to stderr; stdout is reserved for command output such as the
/// `treat --json` report. A second call is a no-op.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// Route debug-level engine logs into the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
