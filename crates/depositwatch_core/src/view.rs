//! View pipeline: filter, sort, and project records for the table and chart.
//!
//! Everything here is a pure function of the store and the view parameters.
//! The pipeline runs in full after every event; nothing is cached.

use crate::chart::{chart_title, project_chart, ChartPoint};
use crate::format::{format_deposits, format_rank};
use crate::model::{Category, Institution};
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Stored rank
    #[default]
    Rank,
    /// Deposits in billions
    Deposits,
}

impl SortField {
    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            Self::Rank => "Rank",
            Self::Deposits => "Deposits",
        }
    }

    /// Three-way numeric comparison of two records on this field
    pub fn compare(&self, a: &Institution, b: &Institution) -> Ordering {
        match self {
            Self::Rank => a.rank.cmp(&b.rank),
            Self::Deposits => a.deposits.total_cmp(&b.deposits),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Non-decreasing keys
    #[default]
    Ascending,
    /// Non-increasing keys
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Inclusive bound on `rank` used by [`FilterMode::RankWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWindow {
    /// Lowest rank retained
    pub min: u32,
    /// Highest rank retained
    pub max: u32,
}

impl RankWindow {
    /// Create a window, inclusive on both ends
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `rank` lies in the closed interval
    pub fn contains(&self, rank: u32) -> bool {
        (self.min..=self.max).contains(&rank)
    }
}

impl Default for RankWindow {
    fn default() -> Self {
        Self::new(35, 45)
    }
}

/// Which records the table retains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Every record
    #[default]
    All,
    /// Only records whose rank falls in the configured window
    RankWindow,
}

impl FilterMode {
    /// Cycle to the other mode
    pub fn toggled(&self) -> Self {
        match self {
            Self::All => Self::RankWindow,
            Self::RankWindow => Self::All,
        }
    }

    /// Label shown in the filter selector
    pub fn label(&self, protocol_name: &str, window: RankWindow) -> String {
        match self {
            Self::All => "Show All Banks".to_string(),
            Self::RankWindow => format!(
                "Near {} (Ranks {}-{})",
                protocol_name, window.min, window.max
            ),
        }
    }
}

/// The view parameters: sort field, sort direction, and filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewParams {
    /// Active sort column
    pub sort_field: SortField,
    /// Active sort direction
    pub sort_direction: SortDirection,
    /// Active filter
    pub filter_mode: FilterMode,
}

impl ViewParams {
    /// Replace the sort field and direction
    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// Replace the filter mode
    pub fn with_filter(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// Sort-header click transition.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column selects it ascending.
    pub fn toggle_sort(self, clicked: SortField) -> Self {
        if clicked == self.sort_field {
            Self {
                sort_direction: self.sort_direction.flipped(),
                ..self
            }
        } else {
            Self {
                sort_field: clicked,
                sort_direction: SortDirection::Ascending,
                ..self
            }
        }
    }

    /// Header indicator for a column: `↕` when inactive, `↑`/`↓` when active
    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        if self.sort_field != field {
            return "↕";
        }
        match self.sort_direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    /// Column header with its sort indicator, e.g. `Deposits ↕`
    pub fn header(&self, field: SortField) -> String {
        format!("{} {}", field.title(), self.sort_indicator(field))
    }
}

/// Fixed parameters of the pipeline that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Bound used by the rank-window filter
    pub rank_window: RankWindow,
    /// Maximum number of chart points
    pub chart_limit: usize,
    /// Names longer than this are truncated in chart labels
    pub label_max_chars: usize,
}

impl ViewSettings {
    /// Heading of the comparison chart, e.g. `Top 5 Comparison`
    pub fn chart_title(&self) -> String {
        chart_title(self.chart_limit)
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            rank_window: RankWindow::default(),
            chart_limit: 5,
            label_max_chars: 15,
        }
    }
}

/// A table row ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Stored rank
    pub rank: u32,
    /// Formatted rank, e.g. `#37`
    pub rank_label: String,
    /// Full name
    pub name: String,
    /// Formatted deposits, e.g. `$69.014B`
    pub deposits: String,
    /// Bank or protocol
    pub category: Category,
}

impl From<&Institution> for TableRow {
    fn from(record: &Institution) -> Self {
        Self {
            rank: record.rank,
            rank_label: format_rank(record.rank),
            name: record.name.clone(),
            deposits: format_deposits(record.deposits),
            category: record.category,
        }
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Filtered and sorted records
    pub records: Vec<Institution>,
    /// Table projection of `records`
    pub rows: Vec<TableRow>,
    /// Chart projection of the head of `records`
    pub chart: Vec<ChartPoint>,
}

impl View {
    /// Caption under the table title
    pub fn caption(&self) -> String {
        format!("Showing {} institutions", self.rows.len())
    }
}

/// Retain records according to the filter mode.
pub fn filter_records(
    records: &[Institution],
    mode: FilterMode,
    window: RankWindow,
) -> Vec<Institution> {
    match mode {
        FilterMode::All => records.to_vec(),
        FilterMode::RankWindow => records
            .iter()
            .filter(|r| window.contains(r.rank))
            .cloned()
            .collect(),
    }
}

/// Stable sort by `field` in `direction`.
///
/// Equal keys keep their input order in both directions; descending compares
/// with the operands swapped rather than reversing an ascending sort.
pub fn sort_records(records: &mut [Institution], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| field.compare(a, b)),
        SortDirection::Descending => records.sort_by(|a, b| field.compare(b, a)),
    }
}

/// Run the full pipeline: filter, sort, then project for table and chart.
pub fn derive_view(store: &RecordStore, params: &ViewParams, settings: &ViewSettings) -> View {
    let mut records = filter_records(store.records(), params.filter_mode, settings.rank_window);
    sort_records(&mut records, params.sort_field, params.sort_direction);

    let rows = records.iter().map(TableRow::from).collect();
    let chart = project_chart(&records, settings.chart_limit, settings.label_max_chars);

    View {
        records,
        rows,
        chart,
    }
}
