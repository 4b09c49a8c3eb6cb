//! Introcs Configuration
//!
//! Handles parsing and management of introcs.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::date::DEFAULT_DATE_FORMAT;

/// Name of the configuration file searched for by [`IntroCsConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "introcs.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching introcs.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IntroCsConfig {
    /// Default precision of the series approximations
    #[serde(default)]
    pub series: SeriesConfig,

    /// Newton's method settings
    #[serde(default)]
    pub sqrt: SqrtConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Date input settings
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl IntroCsConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: IntroCsConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Default term counts for the series approximations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Leibniz terms for π
    #[serde(default = "default_pi_terms")]
    pub pi_terms: i64,

    /// Terms for ln(x)
    #[serde(default = "default_log_terms")]
    pub log_terms: i64,

    /// Terms for e^x
    #[serde(default = "default_exp_terms")]
    pub exp_terms: i64,

    /// Iterations for the golden ratio
    #[serde(default = "default_golden_iterations")]
    pub golden_iterations: i64,
}

fn default_pi_terms() -> i64 {
    1_000_000
}

fn default_log_terms() -> i64 {
    50
}

fn default_exp_terms() -> i64 {
    30
}

fn default_golden_iterations() -> i64 {
    40
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            pi_terms: default_pi_terms(),
            log_terms: default_log_terms(),
            exp_terms: default_exp_terms(),
            golden_iterations: default_golden_iterations(),
        }
    }
}

/// Newton's method settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqrtConfig {
    /// Refinements performed after the first guess
    #[serde(default = "default_sqrt_iterations")]
    pub iterations: i64,
}

fn default_sqrt_iterations() -> i64 {
    100
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self {
            iterations: default_sqrt_iterations(),
        }
    }
}

/// How evaluations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Date input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// chrono format string for date arguments
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntroCsConfig::default();
        assert_eq!(config.series.pi_terms, 1_000_000);
        assert_eq!(config.sqrt.iterations, 100);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.calendar.date_format, "%d-%m-%Y");
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[series]
pi_terms = 500
golden_iterations = 12

[output]
format = "json"
"#;
        let config: IntroCsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.series.pi_terms, 500);
        assert_eq!(config.series.golden_iterations, 12);
        assert_eq!(config.series.log_terms, 50);
        assert_eq!(config.sqrt.iterations, 100);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_find_and_load_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = IntroCsConfig::default();
        config.sqrt.iterations = 7;
        config.save(&root.path().join(CONFIG_FILE_NAME)).unwrap();

        let loaded = IntroCsConfig::find_and_load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = IntroCsConfig::load(&dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
