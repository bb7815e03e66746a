//! Display formatting for deposits and ranks.

/// Format deposits in billions, e.g. `$69.014B`
pub fn format_deposits(deposits: f64) -> String {
    format!("${:.3}B", deposits)
}

/// Format a rank, e.g. `#37`
pub fn format_rank(rank: u32) -> String {
    format!("#{}", rank)
}
