//! Process-wide defaults applied to newly created loggers.

use std::sync::Arc;

use crate::logger::format::LogFormat;
use crate::logger::level::Level;
use crate::sink::{ConsoleSink, OutputSink, SinkKind};

/// Default threshold for new loggers.
pub const DEFAULT_LEVEL: Level = Level::Warn;

/// Settings a logger copies when it is created.
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Initial threshold.
    pub level: Level,
    /// Initial escalation flag.
    pub escalate_on_error: bool,
    /// Initial format template.
    pub format: LogFormat,
    /// Sink the logger writes to.
    pub sink: Arc<dyn OutputSink>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            escalate_on_error: false,
            format: LogFormat::console_default(),
            sink: Arc::new(ConsoleSink::new()),
        }
    }
}

impl Defaults {
    /// Defaults for a built-in sink, with that sink's default template.
    pub fn for_sink(kind: SinkKind) -> Self {
        Self {
            format: kind.default_format(),
            sink: kind.build(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_escalate_on_error(mut self, escalate: bool) -> Self {
        self.escalate_on_error = escalate;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }
}
