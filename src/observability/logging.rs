//! Subscriber setup for binaries.
//!
//! # Responsibilities
//! - Install a `tracing` subscriber for the host sink and diagnostics
//! - Honour `RUST_LOG`, falling back to a caller-supplied directive

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "unilog=info";

/// Install the global subscriber. Returns an error if one is already set.
pub fn init_tracing(fallback: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}
