//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated)
//!     → LoggerRegistry::from_config / apply_config
//!         → Defaults (level, escalation, format, sink)
//!         → configure_levels(levels)
//! ```
//!
//! # Design Decisions
//! - Applied once, eagerly; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::LoggingConfig;
pub use validation::{validate_config, ValidationError};
