//! Configuration management.
//!
//! Settings come from three layers, lowest first: built-in defaults, an
//! optional TOML file, and `PROPHET_SAYS_*` environment variables. Nested
//! keys use a double underscore, e.g. `PROPHET_SAYS_API__TIMEOUT_SECS=10`.
//! Command-line flags are applied on top by the binary.

mod file_config;

pub use file_config::{ConfigFile, ConfigFileError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{Edition, Language};
use crate::sources::DEFAULT_BASE_URL;
use crate::utils::{default_user_agent, DEFAULT_TIMEOUT_SECS};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PROPHET_SAYS";

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "prophet-says.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Initial form selection
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the edition documents
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent_string")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent_string(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent_string() -> String {
    default_user_agent().to_string()
}

/// Edition and language the form starts with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub edition: Edition,

    #[serde(default)]
    pub language: Language,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when neither `RUST_LOG` nor `-v`/`-q` is given
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
    "warn".to_string()
}

/// Tracing filter directive scoping `level` to this crate
pub fn log_filter(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment variables and defaults only
pub fn get_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(environment())
        .build()?
        .try_deserialize()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Locate a configuration file.
///
/// Checks `./prophet-says.toml`, then `<config_dir>/prophet-says/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    default_config_path().filter(|path| path.is_file())
}

/// Per-user configuration path, `<config_dir>/prophet-says/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
}

/// Environment variables that influence configuration, for `--env`
pub const ENV_VARS: &[(&str, &str)] = &[
    ("PROPHET_SAYS_API__BASE_URL", "Root of the edition documents"),
    ("PROPHET_SAYS_API__TIMEOUT_SECS", "Request timeout in seconds"),
    ("PROPHET_SAYS_API__USER_AGENT", "User agent sent with requests"),
    ("PROPHET_SAYS_DEFAULTS__EDITION", "Initial edition code"),
    ("PROPHET_SAYS_DEFAULTS__LANGUAGE", "Initial language code"),
    ("PROPHET_SAYS_LOGGING__LEVEL", "Default log level"),
    ("RUST_LOG", "Full tracing filter, overrides everything"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.user_agent.starts_with("prophet-says/"));
        assert_eq!(config.defaults.edition, Edition::Bukhari);
        assert_eq!(config.defaults.language, Language::English);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_config_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prophet-says.toml");
        std::fs::write(
            &path,
            r#"
[api]
timeout_secs = 5

[defaults]
edition = "abudawud"
language = "urd"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.defaults.edition, Edition::AbuDawud);
        assert_eq!(config.defaults.language, Language::Urdu);
    }

    #[test]
    fn test_load_config_rejects_unknown_edition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prophet-says.toml");
        std::fs::write(&path, "[defaults]\nedition = \"unknown\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config(Path::new("/nonexistent/prophet-says.toml")).is_err());
    }
}
