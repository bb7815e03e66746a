//! Dashboard configuration management.
//!
//! Handles loading of dashboard configuration from TOML files with
//! environment variable override support. Every field has a default, so an
//! empty or missing file yields the reference dashboard.

use crate::refresh::TokioDelay;
use crate::view::{RankWindow, ViewSettings};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file the binaries read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "depositwatch.toml";

/// Inclusive rank bound as written in the config file
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct RankWindowConfig {
    /// Lowest rank retained
    pub min: u32,
    /// Highest rank retained
    pub max: u32,
}

impl Default for RankWindowConfig {
    fn default() -> Self {
        let window = RankWindow::default();
        Self {
            min: window.min,
            max: window.max,
        }
    }
}

impl From<RankWindowConfig> for RankWindow {
    fn from(config: RankWindowConfig) -> Self {
        RankWindow::new(config.min, config.max)
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Name of the tracked protocol record, target of deposits updates
    #[serde(default = "default_protocol_name")]
    pub protocol_name: String,

    /// Bound for the rank-window filter
    #[serde(default)]
    pub rank_window: RankWindowConfig,

    /// Maximum chart bars
    #[serde(default = "default_chart_limit")]
    pub chart_limit: usize,

    /// Chart label width before truncation
    #[serde(default = "default_label_max_chars")]
    pub label_max_chars: usize,

    /// Simulated refresh duration
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file used by the terminal dashboard
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Data source reference shown in the header
    #[serde(default = "default_source_url")]
    pub source_url: String,
}

fn default_protocol_name() -> String {
    "Aave".to_string()
}

fn default_chart_limit() -> usize {
    5
}

fn default_label_max_chars() -> usize {
    15
}

fn default_refresh_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("depositwatch.log")
}

fn default_source_url() -> String {
    "https://www.federalreserve.gov/releases/lbr/current/".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            protocol_name: default_protocol_name(),
            rank_window: RankWindowConfig::default(),
            chart_limit: default_chart_limit(),
            label_max_chars: default_label_max_chars(),
            refresh_delay_ms: default_refresh_delay_ms(),
            log_level: default_log_level(),
            log_file: default_log_file(),
            source_url: default_source_url(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, defaults otherwise; parse errors are reported
    pub fn load_if_present(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(name) = std::env::var("DEPOSITWATCH_PROTOCOL_NAME") {
            self.protocol_name = name;
        }

        if let Ok(min) = std::env::var("DEPOSITWATCH_RANK_MIN") {
            if let Ok(min) = min.parse() {
                self.rank_window.min = min;
            }
        }

        if let Ok(max) = std::env::var("DEPOSITWATCH_RANK_MAX") {
            if let Ok(max) = max.parse() {
                self.rank_window.max = max;
            }
        }

        if let Ok(limit) = std::env::var("DEPOSITWATCH_CHART_LIMIT") {
            if let Ok(limit) = limit.parse() {
                self.chart_limit = limit;
            }
        }

        if let Ok(width) = std::env::var("DEPOSITWATCH_LABEL_MAX_CHARS") {
            if let Ok(width) = width.parse() {
                self.label_max_chars = width;
            }
        }

        if let Ok(delay) = std::env::var("DEPOSITWATCH_REFRESH_DELAY_MS") {
            if let Ok(delay) = delay.parse() {
                self.refresh_delay_ms = delay;
            }
        }

        if let Ok(log_level) = std::env::var("DEPOSITWATCH_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(log_file) = std::env::var("DEPOSITWATCH_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }

        if let Ok(url) = std::env::var("DEPOSITWATCH_SOURCE_URL") {
            self.source_url = url;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.protocol_name.trim().is_empty() {
            errors.push("protocol_name cannot be empty".to_string());
        }

        if self.rank_window.min == 0 {
            errors.push("rank_window.min must be at least 1".to_string());
        }
        if self.rank_window.min > self.rank_window.max {
            errors.push(format!(
                "rank_window.min {} exceeds rank_window.max {}",
                self.rank_window.min, self.rank_window.max
            ));
        }

        if self.chart_limit == 0 || self.chart_limit > 50 {
            errors.push(format!(
                "chart_limit {} out of range (1..=50)",
                self.chart_limit
            ));
        }

        if self.label_max_chars == 0 {
            errors.push("label_max_chars must be greater than 0".to_string());
        }

        if self.refresh_delay_ms > 60_000 {
            errors.push(format!(
                "refresh_delay_ms {} exceeds maximum allowed (60000)",
                self.refresh_delay_ms
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.log_file.as_os_str().is_empty() {
            errors.push("log_file cannot be empty".to_string());
        }

        if !self.source_url.starts_with("http://") && !self.source_url.starts_with("https://") {
            errors.push(format!(
                "Invalid source_url '{}'. Must start with http:// or https://",
                self.source_url
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_if_present(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Pipeline settings derived from this config
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            rank_window: self.rank_window.into(),
            chart_limit: self.chart_limit,
            label_max_chars: self.label_max_chars,
        }
    }

    /// Refresh delay derived from this config
    pub fn refresh_delay(&self) -> TokioDelay {
        TokioDelay::from_millis(self.refresh_delay_ms)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
