//! Configuration file writing for prophet-says.
//!
//! Files are read back through [`load_config`](super::load_config), so a
//! saved file picks up environment overrides like any other.
//!
//! # Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1/editions"
//! timeout_secs = 30
//! user_agent = "prophet-says/0.1.0"
//!
//! [defaults]
//! edition = "bukhari"
//! language = "eng"
//!
//! [logging]
//! level = "warn"
//! ```

use serde::Serialize;
use std::path::Path;

use super::{ApiConfig, Config, DefaultsConfig, LoggingConfig};

/// Configuration file structure
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ConfigFile {
    pub api: ApiConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigFileError> {
        toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

impl From<Config> for ConfigFile {
    fn from(config: Config) -> Self {
        Self {
            api: config.api,
            defaults: config.defaults,
            logging: config.logging,
        }
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}
