//! The process-wide registry.

use std::sync::{Arc, OnceLock};

use crate::logger::Logger;
use crate::registry::store::LoggerRegistry;

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry, built with [`Defaults::default`](crate::Defaults)
/// on first use and never torn down.
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::default)
}

/// Get or create a logger in the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    global().get_logger(name)
}

/// Apply `name → level name` pairs to the process-wide registry.
pub fn configure_levels<I, K, V>(levels: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    global().configure_levels(levels)
}
