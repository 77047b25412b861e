use serde::{Deserialize, Serialize};

use super::das::DasConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};

/// Main configuration structure for the IRIS DAS client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DAS server target and timeout
    #[serde(default)]
    pub das: DasConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result presentation
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. iris-das.toml in current directory
    /// 3. /etc/iris-das/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server_address {
            self.das.server_address = server;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.das.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.das.server_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "DAS server address cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("iris-das.toml").exists() {
            Some("iris-das.toml".to_string())
        } else if std::path::Path::new("/etc/iris-das/config.toml").exists() {
            Some("/etc/iris-das/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server_address: Option<String>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub output_format: Option<OutputFormat>,
}
