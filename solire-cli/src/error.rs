//! Error types for the solire CLI

use thiserror::Error;

/// Errors raised by the TUI layer
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("failed to restore terminal: {0}")]
    TerminalRestore(#[source] std::io::Error),

    #[error("render error: {0}")]
    Render(#[source] std::io::Error),
}

/// Top-level CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Tui(#[from] TuiError),

    #[error("configuration error: {0}")]
    Config(#[from] solire_config::ConfigError),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}
