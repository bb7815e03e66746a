//! depositwatch CLI - Command Line Views of the Deposits Dashboard
//!
//! # Commands
//!
//! - `depositwatch table` - Print the sorted, filtered rankings table
//! - `depositwatch chart` - Print the top-N chart points, or Chart.js JSON
//! - `depositwatch stats` - Print the summary statistics
//! - `depositwatch check` - Validate configuration
//!
//! Every view command accepts `--protocol-deposits <text>`, applied exactly
//! like the dashboard's deposits input: text that does not parse to a finite
//! positive number is ignored.

use clap::{Args, Parser, Subcommand, ValueEnum};
use depositwatch_core::config::{DashboardConfig, DEFAULT_CONFIG_PATH};
use depositwatch_core::view::{FilterMode, SortDirection, SortField};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Protocol-vs-banks deposits dashboard CLI
#[derive(Parser)]
#[command(name = "depositwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Sort column
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Stored rank
    Rank,
    /// Deposits
    Deposits,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rank => SortField::Rank,
            SortArg::Deposits => SortField::Deposits,
        }
    }
}

/// Filter mode
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    /// Every institution
    All,
    /// Only ranks inside the configured window
    RankWindow,
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FilterMode::All,
            FilterArg::RankWindow => FilterMode::RankWindow,
        }
    }
}

/// Options shared by the view commands
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Sort column
    #[arg(short, long, value_enum, default_value = "rank")]
    sort: SortArg,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Filter mode
    #[arg(short, long, value_enum, default_value = "all")]
    filter: FilterArg,

    /// New protocol deposits in billions, as typed into the dashboard
    #[arg(short, long)]
    protocol_deposits: Option<String>,
}

impl ViewArgs {
    /// Sort direction from the `--desc` flag
    pub fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rankings table
    Table {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print the comparison chart points
    Chart {
        #[command(flatten)]
        view: ViewArgs,

        /// Emit Chart.js-compatible JSON
        #[arg(long)]
        json: bool,
    },

    /// Print summary statistics
    Stats {
        /// New protocol deposits in billions, as typed into the dashboard
        #[arg(short, long)]
        protocol_deposits: Option<String>,
    },

    /// Validate configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; output goes to stderr so stdout stays pipeable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Check => commands::check::run(&cli.config),
        Commands::Table { view } => commands::table::run(&load_config(&cli.config)?, &view),
        Commands::Chart { view, json } => {
            commands::chart::run(&load_config(&cli.config)?, &view, json)
        }
        Commands::Stats { protocol_deposits } => {
            commands::stats::run(&load_config(&cli.config)?, protocol_deposits.as_deref())
        }
    }
}

/// Load the config file if present, apply env overrides, and validate
fn load_config(path: &Path) -> Result<DashboardConfig> {
    let config = DashboardConfig::load_with_env_and_validate(path)?;
    info!(path = %path.display(), protocol = %config.protocol_name, "configuration loaded");
    Ok(config)
}
