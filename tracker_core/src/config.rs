//! Configuration file support for fitrep.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitrep/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where sensor packages come from when none are given on the command line
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub packages_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME")
                    .map_err(|_| Error::Config("HOME environment variable not set".into()))?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("fitrep").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
