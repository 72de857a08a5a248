//! Applying a loaded [`LoggingConfig`] to a registry.

use crate::config::{validate_config, ConfigError, LoggingConfig, ValidationError};
use crate::logger::format::LogFormat;
use crate::registry::defaults::Defaults;
use crate::registry::store::LoggerRegistry;

impl LoggerRegistry {
    /// Build a registry whose defaults and levels come from `config`.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;
        let defaults = defaults_from(config)?;

        let registry = Self::new(defaults);
        registry.configure_from(config);
        Ok(registry)
    }

    /// Replace this registry's defaults with those in `config`, then apply
    /// its per-logger levels. Loggers not named in `levels` keep their
    /// current settings. On error the registry is left untouched.
    pub fn apply_config(&self, config: &LoggingConfig) -> Result<(), ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;
        let defaults = defaults_from(config)?;

        self.set_defaults(defaults);
        self.configure_from(config);
        Ok(())
    }

    /// Apply `levels`. Under `strict_levels` every name has already been
    /// validated, so nothing falls back here.
    fn configure_from(&self, config: &LoggingConfig) {
        self.configure_levels(&config.levels);

        tracing::info!(
            sink = ?config.sink,
            default_level = %config.default_level,
            levels = config.levels.len(),
            "Logging configuration applied"
        );
    }
}

fn defaults_from(config: &LoggingConfig) -> Result<Defaults, ConfigError> {
    let mut defaults = Defaults::for_sink(config.sink)
        .with_level(config.default_level)
        .with_escalate_on_error(config.escalate_on_error);

    if let Some(template) = &config.format {
        let format = LogFormat::parse(template)
            .map_err(|e| ConfigError::Validation(vec![ValidationError::InvalidFormat(e)]))?;
        defaults = defaults.with_format(format);
    }

    Ok(defaults)
}
