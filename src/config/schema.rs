//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files:
//!
//! ```toml
//! default_level = "Warn"
//! escalate_on_error = false
//! sink = "console"
//! format = "[{0}] {1}: {2}"
//!
//! [levels]
//! net = "Debug"
//! db = "Off"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logger::level::Level;
use crate::registry::defaults::DEFAULT_LEVEL;
use crate::sink::SinkKind;

/// Root logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Threshold for loggers not listed in `levels`, and the fallback for
    /// unrecognised level names.
    pub default_level: Level,

    /// Whether new loggers escalate Error calls instead of writing them.
    pub escalate_on_error: bool,

    /// Format template for new loggers. Defaults to the sink's template.
    pub format: Option<String>,

    /// Which built-in sink new loggers write to.
    pub sink: SinkKind,

    /// Reject unknown level names instead of falling back to `default_level`.
    pub strict_levels: bool,

    /// Per-logger level display names, applied eagerly. Any logger name is
    /// accepted, including `""`, unless `strict_levels` is set.
    pub levels: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            escalate_on_error: false,
            format: None,
            sink: SinkKind::Console,
            strict_levels: false,
            levels: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LoggingConfig = toml::from_str("").unwrap();
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.default_level, Level::Warn);
        assert_eq!(config.sink, SinkKind::Console);
    }

    #[test]
    fn test_full_config() {
        let config: LoggingConfig = toml::from_str(
            r#"
            default_level = "Info"
            escalate_on_error = true
            sink = "host"
            format = "{0} {2}"
            strict_levels = true

            [levels]
            net = "Debug"
            db = "Off"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_level, Level::Info);
        assert!(config.escalate_on_error);
        assert_eq!(config.sink, SinkKind::Host);
        assert_eq!(config.format.as_deref(), Some("{0} {2}"));
        assert!(config.strict_levels);
        assert_eq!(config.levels.get("net").map(String::as_str), Some("Debug"));
        assert_eq!(config.levels.len(), 2);
    }

    #[test]
    fn test_default_level_must_be_known() {
        // Per-logger names are checked later; the default itself must parse.
        assert!(toml::from_str::<LoggingConfig>("default_level = \"Loud\"").is_err());
    }
}
