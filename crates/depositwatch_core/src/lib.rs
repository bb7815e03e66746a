//! # depositwatch_core: Deposits Dashboard Foundation
//!
//! Compares a DeFi lending protocol's deposits against a fixed list of U.S.
//! bank holding companies. The crate holds everything the surfaces need:
//!
//! - Institution records and the seed dataset (`model`, `store`)
//! - The pure sort/filter/project pipeline (`view`, `chart`)
//! - Summary statistics over the unfiltered store (`summary`)
//! - Display formatting (`format`)
//! - Lenient parsing of the deposits text input (`input`)
//! - The explicit session state driven by UI events (`session`)
//! - The simulated refresh delay hook (`refresh`)
//! - TOML configuration with environment overrides (`config`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use depositwatch_core::prelude::*;
//!
//! let store = RecordStore::seed();
//! let params = ViewParams::default()
//!     .with_sort(SortField::Deposits, SortDirection::Descending);
//! let view = derive_view(&store, &params, &ViewSettings::default());
//!
//! assert_eq!(view.rows[0].name, "UMB BK NA/UMB FC");
//! assert_eq!(view.rows[0].deposits, "$69.014B");
//! assert!(view.chart.len() <= 5);
//! ```

#![warn(missing_docs)]

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod refresh;
pub mod session;
pub mod store;
pub mod summary;
pub mod view;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chart::{ChartJsBarChart, ChartPoint};
    pub use crate::config::{ConfigError, DashboardConfig, RankWindowConfig};
    pub use crate::error::{DashboardError, InputError};
    pub use crate::format::{format_deposits, format_rank};
    pub use crate::input::parse_deposits_input;
    pub use crate::model::{Category, Institution};
    pub use crate::refresh::{spawn_refresh, ImmediateDelay, RefreshDelay, TokioDelay};
    pub use crate::session::Session;
    pub use crate::store::RecordStore;
    pub use crate::summary::SummaryStats;
    pub use crate::view::{
        derive_view, FilterMode, RankWindow, SortDirection, SortField, TableRow, View,
        ViewParams, ViewSettings,
    };
}
