//! Plain console sink.

use std::io::{self, Write};

use super::{OutputSink, Tier};

/// Writes every line to stdout regardless of tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&self, _logger: &str, _tier: Tier, line: &str) {
        // Lock once so concurrent loggers never interleave within a line.
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", line);
    }
}
