//! Logger counters.
//!
//! # Metrics
//! - `unilog_lines_total` (counter): lines written, by logger and level
//! - `unilog_escalations_total` (counter): Error calls turned into faults
//!
//! # Design Decisions
//! - Facade only; no exporter, so these are no-ops without a host recorder
//! - Calls dropped by the threshold are not counted; the filtered path
//!   stays a single atomic load

use metrics::counter;

use crate::logger::Level;

pub const LINES_TOTAL: &str = "unilog_lines_total";
pub const ESCALATIONS_TOTAL: &str = "unilog_escalations_total";

pub fn record_line(logger: &str, level: Level) {
    counter!(LINES_TOTAL, "logger" => logger.to_string(), "level" => level.name()).increment(1);
}

pub fn record_escalation(logger: &str, level: Level) {
    counter!(ESCALATIONS_TOTAL, "logger" => logger.to_string(), "level" => level.name())
        .increment(1);
}
