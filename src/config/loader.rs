//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LoggingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LoggingConfig, ConfigError> {
    let config: LoggingConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_level = \"Debug\"\n[levels]\nnet = \"Error\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.default_level, crate::Level::Debug);
        assert_eq!(config.levels["net"], "Error");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/unilog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("default_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("strict_levels = true\n[levels]\na = \"Loud\"\nb = \"Quiet\"")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: levels.a: unknown level name \"Loud\", levels.b: unknown level name \"Quiet\""
        );
    }
}
