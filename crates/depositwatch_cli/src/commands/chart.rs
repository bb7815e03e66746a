//! Chart command implementation
//!
//! Prints the top-N chart projection as text bars or Chart.js JSON.

use std::fmt::Write;

use depositwatch_core::chart::{ChartJsBarChart, ChartPoint};
use depositwatch_core::config::DashboardConfig;
use depositwatch_core::format::format_deposits;
use tracing::info;

use super::session_for;
use crate::{Result, ViewArgs};

/// Width of the longest bar in characters
const BAR_WIDTH: usize = 40;

/// Run the chart command
pub fn run(config: &DashboardConfig, args: &ViewArgs, json: bool) -> Result<()> {
    let session = session_for(config, args.protocol_deposits.as_deref(), Some(args));
    let points = session.view().chart;
    let title = session.settings().chart_title();
    info!(points = points.len(), json, "rendering chart");

    if json {
        println!("{}", ChartJsBarChart::from_points(&points, title).to_json_string()?);
    } else {
        print!("{}", render(&points, &title));
    }
    Ok(())
}

/// Render horizontal text bars scaled to the largest value
pub fn render(points: &[ChartPoint], title: &str) -> String {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for point in points {
        let len = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let glyph = if point.highlight { "▓" } else { "█" };
        let _ = writeln!(
            out,
            "{:<label_width$} {} {}",
            point.label,
            glyph.repeat(len),
            format_deposits(point.value)
        );
    }
    out
}
