//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the format template parses
//! - Check per-logger names and level names when `strict_levels` is set
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Lenient configs accept unknown level names; the registry falls back

use std::fmt;

use crate::config::schema::LoggingConfig;
use crate::logger::format::{FormatError, LogFormat};
use crate::logger::level::Level;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidFormat(FormatError),
    UnknownLevel { logger: String, level: String },
    EmptyLoggerName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidFormat(e) => write!(f, "format: {}", e),
            ValidationError::UnknownLevel { logger, level } => {
                write!(f, "levels.{}: unknown level name {:?}", logger, level)
            }
            ValidationError::EmptyLoggerName => write!(f, "levels: empty logger name"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a config, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(template) = &config.format {
        if let Err(e) = LogFormat::parse(template) {
            errors.push(ValidationError::InvalidFormat(e));
        }
    }

    // Lenient configs accept anything `configure_levels` accepts.
    if !config.strict_levels {
        return if errors.is_empty() { Ok(()) } else { Err(errors) };
    }

    for (logger, level) in &config.levels {
        if logger.is_empty() {
            errors.push(ValidationError::EmptyLoggerName);
        }
        if Level::from_name(level).is_none() {
            errors.push(ValidationError::UnknownLevel {
                logger: logger.clone(),
                level: level.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn test_lenient_accepts_unknown_levels() {
        let mut config = LoggingConfig::default();
        config.levels.insert("x".into(), "Nonexistent".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_lenient_accepts_empty_logger_name() {
        let mut config = LoggingConfig::default();
        config.levels.insert("".into(), "Info".into());
        assert!(validate_config(&config).is_ok());

        config.strict_levels = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyLoggerName])
        );
    }

    #[test]
    fn test_lenient_still_checks_format() {
        let config = LoggingConfig {
            format: Some("{9}".into()),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            validate_config(&config).unwrap_err().as_slice(),
            [ValidationError::InvalidFormat(_)]
        ));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = LoggingConfig::default();
        config.strict_levels = true;
        config.format = Some("{0} {5}".into());
        config.levels.insert("x".into(), "Nonexistent".into());
        config.levels.insert("".into(), "Info".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyLoggerName));
        assert!(errors.contains(&ValidationError::UnknownLevel {
            logger: "x".into(),
            level: "Nonexistent".into()
        }));
        assert!(errors[0].to_string().starts_with("format: invalid placeholder {5}"));
    }
}
