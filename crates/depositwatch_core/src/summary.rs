//! Summary statistics over the unfiltered store.

use crate::format::{format_deposits, format_rank};
use crate::model::Category;
use crate::store::RecordStore;
use serde::Serialize;

/// Stat cards shown under the table.
///
/// Always computed from the full store, so the active sort and filter never
/// change them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Protocol record deposits, if a protocol record exists
    pub protocol_deposits: Option<f64>,
    /// Protocol record stored rank, if a protocol record exists
    pub protocol_rank: Option<u32>,
    /// Number of traditional banks
    pub institution_count: usize,
}

impl SummaryStats {
    /// Compute from the store. `protocol_name` picks the tracked record.
    pub fn compute(store: &RecordStore, protocol_name: &str) -> Self {
        let protocol = store.find(protocol_name);
        Self {
            protocol_deposits: protocol.map(|r| r.deposits),
            protocol_rank: protocol.map(|r| r.rank),
            institution_count: store
                .iter()
                .filter(|r| r.category == Category::Institution)
                .count(),
        }
    }

    /// Formatted deposits card, empty when there is no protocol record
    pub fn deposits_label(&self) -> String {
        self.protocol_deposits.map(format_deposits).unwrap_or_default()
    }

    /// Formatted rank card, empty when there is no protocol record
    pub fn rank_label(&self) -> String {
        self.protocol_rank.map(format_rank).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_summary() {
        let stats = SummaryStats::compute(&RecordStore::seed(), "Aave");
        assert_eq!(stats.protocol_deposits, Some(67.921));
        assert_eq!(stats.protocol_rank, Some(38));
        assert_eq!(stats.institution_count, 6);
        assert_eq!(stats.deposits_label(), "$67.921B");
        assert_eq!(stats.rank_label(), "#38");
    }

    #[test]
    fn test_summary_follows_update() {
        let store = RecordStore::seed().update_deposits("Aave", 75.5);
        let stats = SummaryStats::compute(&store, "Aave");
        assert_eq!(stats.protocol_deposits, Some(75.5));
        assert_eq!(stats.protocol_rank, Some(38));
    }

    #[test]
    fn test_summary_without_protocol() {
        let stats = SummaryStats::compute(&RecordStore::seed(), "Compound");
        assert_eq!(stats.protocol_deposits, None);
        assert_eq!(stats.rank_label(), "");
        assert_eq!(stats.institution_count, 6);
    }
}
