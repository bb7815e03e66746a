//! Table command implementation
//!
//! Prints the rankings table for the requested view.

use std::fmt::Write;

use depositwatch_core::config::DashboardConfig;
use depositwatch_core::view::{SortField, View, ViewParams};
use tracing::info;

use super::session_for;
use crate::{Result, ViewArgs};

/// Run the table command
pub fn run(config: &DashboardConfig, args: &ViewArgs) -> Result<()> {
    let session = session_for(config, args.protocol_deposits.as_deref(), Some(args));
    let params = session.params();
    info!(?params, "rendering table");

    print!("{}", render(&session.view(), params));
    Ok(())
}

/// Render the table as text
pub fn render(view: &View, params: ViewParams) -> String {
    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.chars().count() + r.category.badge().map_or(0, |b| b.len() + 3))
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "{}", view.caption());
    let _ = writeln!(
        out,
        "{:<8} {:<name_width$} {:>12}",
        params.header(SortField::Rank),
        "Name",
        params.header(SortField::Deposits),
    );
    let _ = writeln!(out, "{}", "-".repeat(8 + 1 + name_width + 1 + 12));

    for row in &view.rows {
        let name = match row.category.badge() {
            Some(badge) => format!("{} [{}]", row.name, badge),
            None => row.name.clone(),
        };
        let _ = writeln!(
            out,
            "{:<8} {:<name_width$} {:>12}",
            row.rank_label, name, row.deposits
        );
    }
    out
}
