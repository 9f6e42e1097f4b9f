//! Configuration data structures

use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI-specific settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Global options (behavior, features)
    #[serde(default)]
    pub options: Options,

    /// Telemetry sampling settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// UI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sidebar width in characters
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Show UI borders
    #[serde(default = "default_true")]
    pub show_borders: bool,
}

/// Global options for application behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Enable mouse support
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,

    /// Start with the sidebar collapsed (wide layouts only)
    #[serde(default)]
    pub start_collapsed: bool,
}

/// Telemetry sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Seconds between synthetic sensor samples
    #[serde(default = "default_sample_interval")]
    pub sample_interval_secs: u64,

    /// Readings retained per sensor channel
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

// Default value helper functions
fn default_true() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    26
}

fn default_sample_interval() -> u64 {
    2
}

fn default_log_capacity() -> usize {
    360
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            show_borders: default_true(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mouse_enabled: default_true(),
            start_collapsed: false,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: default_sample_interval(),
            log_capacity: default_log_capacity(),
        }
    }
}
