//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use obligation_schedule::DEFAULT_WINDOW_DAYS;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, table")]
    InvalidFormat(String),

    #[error("Invalid default window: {0}. Must be a positive number of days")]
    InvalidWindowDays(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How generated schedules are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of occurrences
    #[default]
    Json,
    /// Human-readable table
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Days covered by the window when no end date is given
    pub default_window_days: u64,
    /// Output format for generated schedules
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            default_window_days: DEFAULT_WINDOW_DAYS,
            output_format: OutputFormat::Json,
        }
    }
}

const ENV_LOG_LEVEL: &str = "OBLIGATIONS_LOG_LEVEL";
const ENV_WINDOW_DAYS: &str = "OBLIGATIONS_WINDOW_DAYS";
const ENV_FORMAT: &str = "OBLIGATIONS_FORMAT";

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Takes a lookup function so callers (and tests) control where values come from.
    pub fn merge_with_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(days) = lookup(ENV_WINDOW_DAYS) {
            self.default_window_days = days
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidWindowDays(days.clone()))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(days) = cli.window_days {
            self.default_window_days = days;
        }
        if let Some(format) = &cli.format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_window_days == 0 {
            return Err(ConfigError::InvalidWindowDays(
                self.default_window_days.to_string(),
            ));
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Default window length override
    pub window_days: Option<u64>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.merge_with_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.default_window_days, 365);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("OBLIGATIONS_LOG_LEVEL", "debug"),
            ("OBLIGATIONS_WINDOW_DAYS", "90"),
            ("OBLIGATIONS_FORMAT", "table"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .merge_with_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_window_days, 90);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_env_rejects_bad_window() {
        let mut config = CliConfig::default();
        let result = config.merge_with_env(|key| {
            (key == "OBLIGATIONS_WINDOW_DAYS").then(|| "a year".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidWindowDays(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            config_file: None,
            log_level: Some("error".to_string()),
            window_days: Some(30),
            format: Some("table".to_string()),
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.default_window_days, 30);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_validate_window_days() {
        let mut config = CliConfig::default();
        config.default_window_days = 0;
        assert!(config.validate().is_err());

        config.default_window_days = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "info"
            default_window_days = 180
            output_format = "table"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_window_days, 180);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("default_window_days = 31").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.default_window_days, 31);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_format = \"table\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);

        let missing = CliConfig::from_file(Path::new("/nonexistent/obligations.toml"));
        assert!(matches!(missing, Err(ConfigError::FileError(_))));
    }
}
