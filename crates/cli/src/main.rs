use std::process::ExitCode;

use anyhow::Result;
use quotemill_cli::config::{CliConfig, LoadOptions, LogFormat};

fn init_logging(config: &CliConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

fn main() -> Result<ExitCode> {
    let config = CliConfig::load(LoadOptions::default())?;
    init_logging(&config);

    Ok(quotemill_cli::run())
}
