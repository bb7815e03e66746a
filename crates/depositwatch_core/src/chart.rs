//! Chart projection and Chart.js-compatible export.
//!
//! The chart shows the head of the sorted, filtered sequence. Labels are
//! shortened so long bank names fit under a bar; the protocol's bar is
//! highlighted.

use crate::model::Institution;
use serde::Serialize;

/// Marker appended to truncated labels
pub const ELLIPSIS: &str = "...";

/// Bar colour for the highlighted (protocol) bar
pub const HIGHLIGHT_COLOUR: &str = "#a855f7";

/// Bar colour for every other bar
pub const BASE_COLOUR: &str = "#6366f1";

/// One bar of the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Shortened name
    pub label: String,
    /// Raw deposits in billions
    pub value: f64,
    /// True for the protocol record
    pub highlight: bool,
}

/// Truncate `name` to `max_chars` characters plus [`ELLIPSIS`].
///
/// Names of exactly `max_chars` characters are returned unchanged. Counting
/// is by `char`, not byte.
pub fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let head: String = name.chars().take(max_chars).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        name.to_string()
    }
}

/// Chart heading for a chart of at most `limit` bars.
///
/// Follows the configured limit, not the number of bars drawn, so a filter
/// that leaves fewer records keeps the heading.
pub fn chart_title(limit: usize) -> String {
    format!("Top {} Comparison", limit)
}

/// Project the first `limit` records into chart points.
pub fn project_chart(records: &[Institution], limit: usize, max_chars: usize) -> Vec<ChartPoint> {
    records
        .iter()
        .take(limit)
        .map(|r| ChartPoint {
            label: truncate_label(&r.name, max_chars),
            value: r.deposits,
            highlight: r.category.is_protocol(),
        })
        .collect()
}

/// Chart.js dataset
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    /// Dataset label
    pub label: String,
    /// Bar values
    pub data: Vec<f64>,
    /// One colour per bar
    pub background_color: Vec<String>,
}

/// Chart.js data block
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    /// X axis labels
    pub labels: Vec<String>,
    /// Datasets
    pub datasets: Vec<ChartJsDataset>,
}

/// Chart.js title options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitleOptions {
    /// Whether the title is shown
    pub display: bool,
    /// Title text
    pub text: String,
}

/// Chart.js options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsOptions {
    /// Title settings
    pub title: ChartJsTitleOptions,
}

/// Chart.js-compatible bar chart
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsBarChart {
    /// Always `"bar"`
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartJsData,
    /// Chart options
    pub options: ChartJsOptions,
}

impl ChartJsBarChart {
    /// Build a bar chart from projected points under `title`
    pub fn from_points(points: &[ChartPoint], title: impl Into<String>) -> Self {
        Self {
            chart_type: "bar".to_string(),
            data: ChartJsData {
                labels: points.iter().map(|p| p.label.clone()).collect(),
                datasets: vec![ChartJsDataset {
                    label: "Deposits (B)".to_string(),
                    data: points.iter().map(|p| p.value).collect(),
                    background_color: points
                        .iter()
                        .map(|p| {
                            if p.highlight {
                                HIGHLIGHT_COLOUR.to_string()
                            } else {
                                BASE_COLOUR.to_string()
                            }
                        })
                        .collect(),
                }],
            },
            options: ChartJsOptions {
                title: ChartJsTitleOptions {
                    display: true,
                    text: title.into(),
                },
            },
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
