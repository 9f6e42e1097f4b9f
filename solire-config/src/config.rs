//! Configuration loading and validation

use crate::types::Config;
use crate::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Get the default solire config directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".solire")
}

/// Get the default solire config file path
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load configuration from file, or return defaults if not found
pub fn load_or_default() -> Result<Config> {
    let config_path = config_file();

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_toml(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        },
        Err(_) => {
            // Config file doesn't exist, use defaults
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Parse config from TOML string
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(ConfigError::TomlParse)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration value ranges
fn validate_config(config: &Config) -> Result<()> {
    if !(10..=80).contains(&config.ui.sidebar_width) {
        return Err(ConfigError::Validation(format!(
            "ui.sidebar_width must be between 10 and 80 (got {})",
            config.ui.sidebar_width
        )));
    }
    if config.telemetry.sample_interval_secs == 0 {
        return Err(ConfigError::Validation(
            "telemetry.sample_interval_secs must be at least 1".to_string(),
        ));
    }
    if config.telemetry.log_capacity == 0 {
        return Err(ConfigError::Validation(
            "telemetry.log_capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl Config {
    /// Load or return defaults
    pub fn load_or_default() -> Result<Self> {
        load_or_default()
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_from_file(path)
    }
}
