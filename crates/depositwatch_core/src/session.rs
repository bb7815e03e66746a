//! Session state driven by UI events.
//!
//! The session is the single owner of all mutable dashboard state: the
//! current store snapshot, the view parameters, the deposits input buffer,
//! the refresh flag, and the selected table row. Each event method swaps in
//! new values; the view is recomputed in full by [`Session::view`].

use crate::config::DashboardConfig;
use crate::error::InputError;
use crate::input::parse_deposits_input;
use crate::model::Institution;
use crate::refresh::RefreshDelay;
use crate::store::RecordStore;
use crate::summary::SummaryStats;
use crate::view::{derive_view, FilterMode, SortField, View, ViewParams, ViewSettings};

/// Dashboard session
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    params: ViewParams,
    settings: ViewSettings,
    protocol_name: String,
    input: String,
    refreshing: bool,
    selected: usize,
}

impl Session {
    /// New session over the seed dataset
    pub fn new(protocol_name: impl Into<String>, settings: ViewSettings) -> Self {
        Self::with_store(RecordStore::seed(), protocol_name, settings)
    }

    /// New session over an explicit store
    pub fn with_store(
        store: RecordStore,
        protocol_name: impl Into<String>,
        settings: ViewSettings,
    ) -> Self {
        Self {
            store,
            params: ViewParams::default(),
            settings,
            protocol_name: protocol_name.into(),
            input: String::new(),
            refreshing: false,
            selected: 0,
        }
    }

    /// New session configured from `config`
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.protocol_name.clone(), config.view_settings())
    }

    /// Current store snapshot
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current view parameters
    pub fn params(&self) -> ViewParams {
        self.params
    }

    /// Pipeline settings
    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    /// Name of the tracked protocol record
    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    /// Run the view pipeline over the current state
    pub fn view(&self) -> View {
        derive_view(&self.store, &self.params, &self.settings)
    }

    /// Stat cards over the unfiltered store
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::compute(&self.store, &self.protocol_name)
    }

    /// Sort-header click
    pub fn click_sort(&mut self, field: SortField) {
        self.params = self.params.toggle_sort(field);
        tracing::debug!(params = ?self.params, "sort changed");
        self.clamp_selection();
    }

    /// Select a filter mode
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.params = self.params.with_filter(mode);
        tracing::debug!(?mode, "filter changed");
        self.clamp_selection();
    }

    /// Switch to the other filter mode
    pub fn toggle_filter(&mut self) {
        self.set_filter(self.params.filter_mode.toggled());
    }

    /// Text currently in the deposits input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the deposits input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append a typed character to the deposits input
    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the deposits input
    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Apply the deposits input to the protocol record.
    ///
    /// On success the store is replaced and the input cleared. On failure
    /// nothing changes, including the input text; callers are expected to
    /// ignore the error.
    pub fn submit_deposits(&mut self) -> Result<f64, InputError> {
        match parse_deposits_input(&self.input) {
            Ok(value) => {
                self.store = self.store.update_deposits(&self.protocol_name, value);
                self.input.clear();
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(input = %self.input, error = %e, "deposits input ignored");
                Err(e)
            }
        }
    }

    /// Whether a refresh is in flight
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Raise the refresh flag. Returns false if a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        tracing::info!("refresh started");
        true
    }

    /// Lower the refresh flag
    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
        tracing::info!("refresh finished");
    }

    /// Run a whole refresh inline: raise the flag, wait, lower the flag.
    ///
    /// Returns false without waiting when a refresh is already running.
    pub async fn refresh(&mut self, delay: &dyn RefreshDelay) -> bool {
        if !self.begin_refresh() {
            return false;
        }
        delay.wait().await;
        self.finish_refresh();
        true
    }

    /// Index of the selected table row
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection down one row
    pub fn select_next(&mut self) {
        let len = self.view().rows.len();
        if self.selected < len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move the selection up one row
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Record under the selection in the current view
    pub fn selected_record(&self) -> Option<Institution> {
        self.view().records.into_iter().nth(self.selected)
    }

    fn clamp_selection(&mut self) {
        let len = self.view().rows.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::ImmediateDelay;
    use crate::view::{RankWindow, SortDirection};

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert_eq!(session.params(), ViewParams::default());
        assert_eq!(session.input(), "");
        assert!(!session.is_refreshing());
        assert_eq!(session.store().len(), 7);
    }

    #[test]
    fn test_submit_valid_input_updates_and_clears() {
        let mut session = Session::default();
        session.set_input("75.5");

        assert_eq!(session.submit_deposits(), Ok(75.5));
        assert_eq!(session.input(), "");
        assert_eq!(session.summary().protocol_deposits, Some(75.5));
    }

    #[test]
    fn test_submit_invalid_input_keeps_state() {
        let mut session = Session::default();
        let before = session.store().clone();
        session.set_input("-3");

        assert_eq!(session.submit_deposits(), Err(InputError::NotPositive));
        assert_eq!(session.input(), "-3");
        assert_eq!(session.store(), &before);
    }

    #[test]
    fn test_typing_into_input() {
        let mut session = Session::default();
        for c in "80x".chars() {
            session.push_input(c);
        }
        session.pop_input();
        assert_eq!(session.input(), "80");
    }

    #[test]
    fn test_click_sort_transitions() {
        let mut session = Session::default();
        session.click_sort(SortField::Deposits);
        assert_eq!(session.params().sort_field, SortField::Deposits);
        assert_eq!(session.params().sort_direction, SortDirection::Ascending);

        session.click_sort(SortField::Deposits);
        assert_eq!(session.params().sort_direction, SortDirection::Descending);
        assert_eq!(session.view().rows[0].name, "UMB BK NA/UMB FC");
    }

    #[test]
    fn test_summary_ignores_filter_and_sort() {
        let mut session = Session::new(
            "Aave",
            ViewSettings {
                rank_window: RankWindow::new(40, 41),
                ..ViewSettings::default()
            },
        );
        let before = session.summary();

        session.toggle_filter();
        session.click_sort(SortField::Deposits);

        assert_eq!(session.view().rows.len(), 2);
        assert_eq!(session.summary(), before);
    }

    #[test]
    fn test_begin_refresh_rejects_overlap() {
        let mut session = Session::default();
        assert!(session.begin_refresh());
        assert!(!session.begin_refresh());
        session.finish_refresh();
        assert!(!session.is_refreshing());
    }

    #[tokio::test]
    async fn test_refresh_has_no_data_effect() {
        let mut session = Session::default();
        let store_before = session.store().clone();
        let params_before = session.params();

        assert!(session.refresh(&ImmediateDelay).await);

        assert!(!session.is_refreshing());
        assert_eq!(session.store(), &store_before);
        assert_eq!(session.params(), params_before);
    }

    #[test]
    fn test_selection_clamps_after_filter() {
        let mut session = Session::new(
            "Aave",
            ViewSettings {
                rank_window: RankWindow::new(37, 38),
                ..ViewSettings::default()
            },
        );
        for _ in 0..10 {
            session.select_next();
        }
        assert_eq!(session.selected(), 6);

        session.toggle_filter();
        assert_eq!(session.selected(), 1);
        assert_eq!(session.selected_record().map(|r| r.rank), Some(38));

        session.select_previous();
        session.select_previous();
        assert_eq!(session.selected(), 0);
    }
}
