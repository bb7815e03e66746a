//! depositwatch TUI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use depositwatch_core::config::{DashboardConfig, DEFAULT_CONFIG_PATH};
use depositwatch_core::error::DashboardError;
use depositwatch_tui::prelude::*;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Terminal dashboard comparing protocol deposits against U.S. banks
#[derive(Parser)]
#[command(name = "depositwatch-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = start_up(&args.config)
        .with_context(|| format!("starting from {}", args.config.display()))?;

    tracing::info!(protocol = %config.protocol_name, "depositwatch TUI starting");

    let mut app = TuiApp::new(&config)?;
    app.run().await?;

    tracing::info!("depositwatch TUI exiting");
    Ok(())
}

/// Load and validate the configuration, then route logs to its log file
fn start_up(path: &Path) -> std::result::Result<DashboardConfig, DashboardError> {
    let config = DashboardConfig::load_with_env_and_validate(path)?;

    // Logs go to a file so they do not interfere with the terminal
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase())),
        )
        .init();

    Ok(config)
}
