//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tunerdash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use tunerdash_domain::catalog::NodeKey;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replay source and output.
    pub replay: ReplayConfig,
    /// Shape of the simulated page.
    pub page: PageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where frames come from and how the result is printed.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// NDJSON file of recorded frames, or `-` for stdin.
    pub input: String,
    /// Output format of the final node states.
    pub output: OutputFormat,
}

/// Output format of the final page state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Simulated page layout.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Node keys the page does not carry.
    pub missing: Vec<NodeKey>,
    /// Initial content of the device-number input.
    pub device_number: Option<String>,
    /// Number of system status indicators on the page.
    pub status_indicators: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tunerdash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tunerdash.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TUNERDASH_INPUT") {
            self.replay.input = val;
        }
        if let Ok(val) = std::env::var("TUNERDASH_OUTPUT") {
            match val.as_str() {
                "json" => self.replay.output = OutputFormat::Json,
                "text" => self.replay.output = OutputFormat::Text,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("TUNERDASH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.replay.input.trim().is_empty() {
            return Err(ConfigError::Validation(
                "replay input must be a path or '-'".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            input: "-".to_string(),
            output: OutputFormat::Json,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            missing: Vec::new(),
            device_number: None,
            status_indicators: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tunerdash_replay=info,tunerdash_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
