//! Tracing setup
//!
//! Diagnostics are written to stderr so command output on stdout stays
//! machine-readable. Customer field values are never logged, only ids and
//! counts.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter`. Returns false when a subscriber
/// was already installed; the existing one is kept.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
