//! Check command implementation
//!
//! Loads the configuration with environment overrides and reports whether it
//! validates.

use std::path::Path;

use depositwatch_core::config::DashboardConfig;
use tracing::{info, warn};

use crate::Result;

/// Run the check command
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        info!("Using configuration file {}", path.display());
    } else {
        warn!("{} not found, checking defaults", path.display());
    }

    let config = DashboardConfig::load_with_env_and_validate(path)?;

    println!("Configuration OK");
    println!("  Protocol:      {}", config.protocol_name);
    println!(
        "  Rank window:   {}-{}",
        config.rank_window.min, config.rank_window.max
    );
    println!("  Chart limit:   {}", config.chart_limit);
    println!("  Label width:   {}", config.label_max_chars);
    println!("  Refresh delay: {} ms", config.refresh_delay_ms);
    println!("  Log level:     {}", config.log_level);
    println!("  Source:        {}", config.source_url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use std::io::Write;

    #[test]
    fn test_check_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("absent.toml")).is_ok());
    }

    #[test]
    fn test_check_accepts_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "protocol_name = \"Spark\"\nchart_limit = 3").unwrap();

        assert!(run(file.path()).is_ok());
    }

    #[test]
    fn test_check_reports_validation_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chart_limit = 0").unwrap();

        assert!(matches!(run(file.path()), Err(CliError::Config(_))));
    }
}
