//! Named loggers.
//!
//! # Data Flow
//! ```text
//! logger.info("started")
//!     → filter: rank(Info) >= rank(threshold)?   no → dropped
//!     → format: LogFormat::render(name, "Info", "started")
//!     → Error and escalation on?                 yes → Err(Escalation), no output
//!     → sink.write_line(name, Tier::Info, line)
//! ```
//!
//! # Design Decisions
//! - Threshold and escalation flag are atomics, the format is swapped whole,
//!   so a logger can be reconfigured through a shared `Arc<Logger>`
//! - Templates are validated when set, rendering never fails
//! - Escalation is an ordinary `Result` error, never a panic

pub mod format;
pub mod level;
pub mod named;
pub mod types;

pub use format::{FormatError, LogFormat, DEFAULT_CONSOLE_FORMAT, DEFAULT_HOST_FORMAT};
pub use level::{Level, ParseLevelError, LEVEL_NAMES};
pub use named::Logger;
pub use types::{Escalation, LogResult};
