//! Logger registry.
//!
//! # Lifecycle
//! ```text
//! first get_logger("net")
//!     → not present: construct Logger from current Defaults, insert
//! later get_logger("net")
//!     → present: return the same Arc<Logger>
//! set_default_level(..)
//!     → affects loggers created afterwards only
//! ```
//!
//! # Design Decisions
//! - One `Arc<Logger>` per name for the registry's lifetime; entries are
//!   never removed or replaced
//! - Create-if-absent runs under the map shard's write lock, so concurrent
//!   first lookups of a name build exactly one logger
//! - Defaults are swapped whole; a logger copies them once, at creation
//! - The process-wide registry is a lazily built static, but every operation
//!   is also available on an owned `LoggerRegistry` for isolation in tests

mod apply;
pub mod defaults;
pub mod global;
pub mod store;

pub use defaults::Defaults;
pub use global::{configure_levels, get_logger, global};
pub use store::{LoggerRegistry, UnknownLevels};
