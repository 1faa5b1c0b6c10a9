//! Tracing subscriber setup. Logs go to stderr so stdout carries only
//! passwords.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `warn`, or `error` when quiet.
pub fn init(quiet: bool) {
    let fallback = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
