//! The per-name logger.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::logger::format::{FormatError, LogFormat};
use crate::logger::level::Level;
use crate::logger::types::{Escalation, LogResult};
use crate::observability::metrics;
use crate::registry::Defaults;
use crate::sink::OutputSink;

/// A named emitter with its own threshold, format and escalation policy.
///
/// Loggers are normally obtained from a [`LoggerRegistry`](crate::LoggerRegistry)
/// and shared as `Arc<Logger>`; configuration changes are visible to every holder.
pub struct Logger {
    name: String,
    /// Rank of the current threshold level.
    threshold: AtomicU16,
    format: ArcSwap<LogFormat>,
    escalate_on_error: AtomicBool,
    sink: Arc<dyn OutputSink>,
}

impl Logger {
    /// Create a logger seeded from `defaults`.
    pub fn new(name: impl Into<String>, defaults: &Defaults) -> Self {
        Self {
            name: name.into(),
            threshold: AtomicU16::new(defaults.level.rank()),
            format: ArcSwap::from_pointee(defaults.format.clone()),
            escalate_on_error: AtomicBool::new(defaults.escalate_on_error),
            sink: Arc::clone(&defaults.sink),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // --- Configuration ---

    /// Current minimum severity this logger emits.
    pub fn threshold(&self) -> Level {
        // Only ever stored from a `Level`, so the lookup cannot miss.
        Level::from_rank(self.threshold.load(Ordering::Relaxed)).unwrap_or(Level::Off)
    }

    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    /// Current format template.
    pub fn format(&self) -> Arc<LogFormat> {
        self.format.load_full()
    }

    pub fn set_format(&self, format: LogFormat) {
        self.format.store(Arc::new(format));
    }

    /// Parse and install a template. The old template stays on error.
    pub fn set_format_str(&self, template: &str) -> Result<(), FormatError> {
        self.set_format(LogFormat::parse(template)?);
        Ok(())
    }

    pub fn escalate_on_error(&self) -> bool {
        self.escalate_on_error.load(Ordering::Relaxed)
    }

    pub fn set_escalate_on_error(&self, escalate: bool) {
        self.escalate_on_error.store(escalate, Ordering::Relaxed);
    }

    /// Whether a call at `level` would pass the threshold filter.
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::Off && level.rank() >= self.threshold.load(Ordering::Relaxed)
    }

    // --- Logging ---

    /// Filter, format and dispatch one message.
    ///
    /// Returns `Err(Escalation)` only for Error-and-above calls that pass the
    /// filter while escalation is enabled; nothing is written in that case.
    pub fn log(&self, level: Level, message: &str) -> LogResult {
        // Suppressed calls touch nothing but the threshold atomic.
        if !self.is_enabled(level) {
            return Ok(());
        }

        let line = self.format.load().render(&self.name, level.name(), message);

        if level.is_error() && self.escalate_on_error() {
            metrics::record_escalation(&self.name, level);
            return Err(Escalation {
                logger: self.name.clone(),
                level,
                line,
            });
        }

        self.sink.write_line(&self.name, level.tier(), &line);
        metrics::record_line(&self.name, level);
        Ok(())
    }

    pub fn debug(&self, message: &str) {
        self.log_below_error(Level::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log_below_error(Level::Verbose, message);
    }

    pub fn info(&self, message: &str) {
        self.log_below_error(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log_below_error(Level::Warn, message);
    }

    /// Log at Error. Escalates instead of writing when escalation is enabled.
    pub fn error(&self, message: &str) -> LogResult {
        self.log(Level::Error, message)
    }

    fn log_below_error(&self, level: Level, message: &str) {
        debug_assert!(!level.is_error());
        // Below Error a call never escalates.
        let _ = self.log(level, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("format", &self.format.load().template())
            .field("escalate_on_error", &self.escalate_on_error())
            .finish()
    }
}
