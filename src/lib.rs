//! Named logger registry.
//!
//! Hands out one [`Logger`] per name, each with its own severity threshold,
//! format template and escalate-on-error policy.
//!
//! ```no_run
//! use unilog::Level;
//!
//! let net = unilog::get_logger("net");
//! net.set_threshold(Level::Info);
//! net.info("started");              // "[net] Info: started"
//! net.debug("ignored");             // below threshold
//!
//! net.set_escalate_on_error(true);
//! let err = net.error("boom").unwrap_err();
//! assert_eq!(err.to_string(), "[net] Error: boom");
//! ```

pub mod config;
pub mod logger;
pub mod observability;
pub mod registry;
pub mod sink;

pub use config::{load_config, ConfigError, LoggingConfig};
pub use logger::{Escalation, Level, LogFormat, LogResult, Logger};
pub use registry::{configure_levels, get_logger, global, Defaults, LoggerRegistry};
pub use sink::{ConsoleSink, HostSink, MemorySink, OutputSink, SinkKind, Tier};
