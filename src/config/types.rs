use crate::analysis::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - computed, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            gemini: GeminiConfig::default(),
            logging: LoggingConfig::default(),
            locale: default_locale(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(temperature) = self.gemini.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(ConfigError::Validation(format!(
                "gemini.temperature must be within 0.0..=2.0, got {temperature}"
            )));
        }

        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gemini.timeout_secs must be greater than zero".into(),
            ));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::Validation("gemini.model must not be empty".into()));
        }

        self.logging.level_filter()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            temperature: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "off" | "error" | "warn" | "info" | "debug" | "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the full-screen view; without it TUI logs are dropped.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level.trim().parse::<LevelFilter>().map_err(|_| {
            ConfigError::Validation(format!("logging.level '{}' is not a level", self.level))
        })
    }
}
