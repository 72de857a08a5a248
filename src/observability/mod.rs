//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger calls produce:
//!     → metrics.rs (emitted / escalated counters)
//! Registry and config produce:
//!     → tracing events (logger creation, level fallback, config applied)
//!
//! Consumers:
//!     → whatever `metrics` recorder the host installs (none by default)
//!     → logging.rs subscriber, installed by binaries
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Counters are labelled by logger name and level name

pub mod logging;
pub mod metrics;
