//! Stats command implementation

use depositwatch_core::config::DashboardConfig;
use depositwatch_core::summary::SummaryStats;

use super::session_for;
use crate::Result;

/// Run the stats command
pub fn run(config: &DashboardConfig, protocol_deposits: Option<&str>) -> Result<()> {
    let session = session_for(config, protocol_deposits, None);
    print!("{}", render(session.protocol_name(), &session.summary()));
    Ok(())
}

/// Render the stat cards as lines
pub fn render(protocol_name: &str, stats: &SummaryStats) -> String {
    let or_dash = |s: String| if s.is_empty() { "-".to_string() } else { s };
    format!(
        "{} Total Deposits: {}\nCurrent Rank: {}\nTraditional Banks: {}\n",
        protocol_name,
        or_dash(stats.deposits_label()),
        or_dash(stats.rank_label()),
        stats.institution_count
    )
}
