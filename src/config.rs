//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chart::ChartStyle;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Expense server connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; unset means wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Line style shared by the three summary charts
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    #[serde(default)]
    pub fill: bool,

    #[serde(default = "default_tension")]
    pub tension: f64,
}

fn default_stroke_color() -> String {
    ChartStyle::default().stroke_color
}

fn default_tension() -> f64 {
    ChartStyle::default().tension
}

impl ChartsConfig {
    pub fn style(&self) -> ChartStyle {
        ChartStyle {
            stroke_color: self.stroke_color.clone(),
            fill: self.fill,
            tension: self.tension,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            fill: false,
            tension: default_tension(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("expense-tracker").join("config.toml")),
            Some(PathBuf::from("/etc/expense-tracker/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("EXPENSE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("EXPENSE_REQUEST_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.api.request_timeout_secs = Some(secs),
                Err(_) => tracing::warn!("Ignoring invalid EXPENSE_REQUEST_TIMEOUT: {}", timeout),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("EXPENSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("EXPENSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Expense Tracker Configuration
#
# Environment variables override these settings:
# - EXPENSE_API_URL
# - EXPENSE_REQUEST_TIMEOUT
# - EXPENSE_LOG_LEVEL
# - EXPENSE_LOG_FORMAT

[api]
# Base URL of the expense server
base_url = "http://localhost:5000"

# Request timeout in seconds (unset waits indefinitely)
# request_timeout_secs = 30

[charts]
# Line colour of the daily, monthly and yearly charts
stroke_color = "rgba(0,123,255,0.7)"

# Fill the area under the line
fill = false

# Curve tension, 0 draws straight segments
tension = 0.1

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/expense-tracker/expense-cli.log"
"#
    .to_string()
}
