mod error;
mod tui;

use clap::Parser;
use error::CliError;
use solire_config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solire", about = "Soil monitoring dashboard", version)]
struct Cli {
    /// Path to a config file (defaults to ~/.solire/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Log level filter (e.g. "debug", "solire_cli=trace")
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) -> Result<(), CliError> {
    let log_dir = solire_config::config_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| CliError::Logging(format!("cannot create {}: {}", log_dir.display(), e)))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("solire.log"))
        .map_err(|e| CliError::Logging(format!("cannot open log file: {}", e)))?;

    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| CliError::Logging(format!("invalid log filter: {}", e)))?,
        None => EnvFilter::from_default_env().add_directive("solire_cli=info".parse().unwrap()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };
    if cli.no_mouse {
        config.options.mouse_enabled = false;
    }

    tracing::info!("starting solire dashboard");

    let app = tui::App::new(config)?;
    tui::run(app).await?;

    Ok(())
}
