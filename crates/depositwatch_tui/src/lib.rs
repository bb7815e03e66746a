//! # depositwatch TUI
//!
//! Terminal dashboard comparing a DeFi protocol's deposits against U.S.
//! bank holding companies. Uses ratatui for rendering and crossterm for
//! terminal handling.
//!
//! ### Panels
//! - **Controls**: filter mode, deposits input, refresh status
//! - **Rankings**: sortable table of institutions
//! - **Top N Comparison**: bar chart of the head of the table
//! - **Details**: the selected row
//! - **Stats**: protocol deposits, protocol rank, bank count

pub mod app;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{AppState, Command, InputMode, TuiApp};
}
