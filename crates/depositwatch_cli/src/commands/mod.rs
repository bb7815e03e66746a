//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod chart;
pub mod check;
pub mod stats;
pub mod table;

use crate::ViewArgs;
use depositwatch_core::config::DashboardConfig;
use depositwatch_core::session::Session;
use depositwatch_core::view::SortField;

/// Build a session the way the dashboard would reach the requested view:
/// apply the deposits text, select the filter, then click the sort header.
pub(crate) fn session_for(
    config: &DashboardConfig,
    protocol_deposits: Option<&str>,
    view: Option<&ViewArgs>,
) -> Session {
    let mut session = Session::from_config(config);

    if let Some(text) = protocol_deposits {
        session.set_input(text);
        // Rejected text is ignored, as in the dashboard
        let _ = session.submit_deposits();
    }

    if let Some(view) = view {
        session.set_filter(view.filter.into());

        let field: SortField = view.sort.into();
        if field != session.params().sort_field {
            session.click_sort(field);
        }
        if session.params().sort_direction != view.direction() {
            session.click_sort(field);
        }
    }

    session
}
