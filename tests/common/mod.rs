//! Shared utilities for integration tests.

use std::sync::Arc;

use unilog::{Defaults, Level, LoggerRegistry, MemorySink};

/// A registry whose loggers all write into one capturing sink.
pub fn capturing_registry(level: Level) -> (LoggerRegistry, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let defaults = Defaults::default()
        .with_level(level)
        .with_sink(sink.clone());
    let registry = LoggerRegistry::new(defaults);
    (registry, sink)
}

/// Unique logger name for tests touching the process-wide registry.
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::SeqCst))
}
