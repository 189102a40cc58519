//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info,sqlx=warn" }
}

/// Install the global tracing subscriber.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honoured and
/// falls back to [`default_filter`].
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(default_filter(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(false)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
