//! Solire Configuration System
//!
//! Standalone configuration management for the dashboard:
//! - TOML-based configuration file (`~/.solire/config.toml`)
//! - Typed structures with per-field defaults
//! - Load-or-default semantics with value-range validation
//!
//! This crate is independent of the TUI and can be used in other projects.

pub mod config;
pub mod types;

pub use config::{config_dir, config_file, load_or_default};
pub use types::{Config, Options, TelemetryConfig, UiConfig};

/// Errors that can occur during config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
