//! Error types for the deposits dashboard.

use thiserror::Error;

/// Why a deposits text input was rejected.
///
/// None of these are surfaced to the user; the session ignores the input and
/// leaves the buffer as typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing but whitespace
    #[error("input is empty")]
    Empty,

    /// No leading number could be read
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Parsed to infinity
    #[error("value is not finite")]
    NotFinite,

    /// Parsed to zero or a negative value
    #[error("value must be greater than zero")]
    NotPositive,
}

/// Dashboard error type
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
