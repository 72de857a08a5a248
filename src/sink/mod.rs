//! Output sinks.
//!
//! # Data Flow
//! ```text
//! Logger::log(level, msg)
//!     → threshold filter
//!     → LogFormat::render
//!     → OutputSink::write_line(logger, tier, line)
//!         → ConsoleSink (stdout)
//!         → HostSink (tracing events, one macro per tier)
//!         → MemorySink (captured records)
//! ```
//!
//! # Design Decisions
//! - The sink is chosen at configuration time via `SinkKind`, not at compile time
//! - Sinks receive one already-formatted line; they never filter
//! - Sink failures are swallowed by the sink, not reported to the caller

pub mod console;
pub mod host;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logger::format::LogFormat;

pub use console::ConsoleSink;
pub use host::HostSink;
pub use memory::{MemorySink, Record};

/// Severity tier a line is written at, for sinks that distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Info,
    Warning,
    Error,
}

/// Destination for formatted log lines.
pub trait OutputSink: Send + Sync {
    /// Write one formatted line produced by the logger named `logger`.
    fn write_line(&self, logger: &str, tier: Tier, line: &str);
}

impl fmt::Debug for dyn OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OutputSink")
    }
}

/// Selects which built-in sink new loggers write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Plain console output on stdout.
    #[default]
    Console,
    /// The host runtime's log facility (the `tracing` dispatcher).
    Host,
}

impl SinkKind {
    /// Construct the sink for this kind.
    pub fn build(self) -> Arc<dyn OutputSink> {
        match self {
            SinkKind::Console => Arc::new(ConsoleSink::new()),
            SinkKind::Host => Arc::new(HostSink::new()),
        }
    }

    /// The default template paired with this sink.
    pub fn default_format(self) -> LogFormat {
        match self {
            SinkKind::Console => LogFormat::console_default(),
            SinkKind::Host => LogFormat::host_default(),
        }
    }
}
