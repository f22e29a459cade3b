use super::Config;
use crate::error::ConfigError;
use anyhow::Context;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// `~/.mindshift/config.toml`
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Ok(home.join(".mindshift").join("config.toml"))
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error. Env overrides are applied on top and the result is validated.
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self {
                        config_path: path,
                        ..Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::Load(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let mut config: Config = toml::from_str(&contents).map_err(|e| {
            ConfigError::Load(format!("Failed to parse config file {}: {e}", path.display()))
        })?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Whether `config_path` points at a file that was actually read.
    pub fn file_found(&self) -> bool {
        self.config_path.is_file()
    }
}
