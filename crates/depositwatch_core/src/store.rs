//! In-memory record store.
//!
//! The store is an immutable snapshot. The only mutation, replacing the
//! deposits of a named record, returns a new snapshot and leaves the old one
//! untouched. Size is fixed at seed time.

use crate::model::{Category, Institution};
use std::sync::Arc;

/// Ordered, immutable collection of institution records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Arc<[Institution]>,
}

impl RecordStore {
    /// Build a store from records in the given order
    pub fn new(records: Vec<Institution>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The fixed reference dataset.
    pub fn seed() -> Self {
        Self::new(vec![
            Institution::new(37, "UMB BK NA/UMB FC", 69.014, Category::Institution),
            Institution::new(38, "Aave", 67.921, Category::Protocol),
            Institution::new(
                39,
                "SouthState BK NA/SouthState CORP",
                65.109,
                Category::Institution,
            ),
            Institution::new(40, "Valley NB/Valley NAT BC", 61.818, Category::Institution),
            Institution::new(41, "CIBC BK USA/CIBC BC USA", 61.303, Category::Institution),
            Institution::new(42, "Synovus BK/Synovus FC", 60.208, Category::Institution),
            Institution::new(
                43,
                "Pinnacle BK/Pinnacle FNCL PTNR",
                54.473,
                Category::Institution,
            ),
        ])
    }

    /// Records in store order
    pub fn records(&self) -> &[Institution] {
        &self.records
    }

    /// Iterate records in store order
    pub fn iter(&self) -> impl Iterator<Item = &Institution> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Institution> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Replace the deposits of the record named `target`.
    ///
    /// Returns a new snapshot. When no record matches, the returned store is
    /// equal to `self`. The caller must only pass finite values `> 0`.
    pub fn update_deposits(&self, target: &str, deposits: f64) -> Self {
        if self.find(target).is_none() {
            tracing::debug!(target_name = target, "no record matches, store unchanged");
            return self.clone();
        }

        let records: Vec<Institution> = self
            .records
            .iter()
            .map(|r| {
                if r.name == target {
                    r.with_deposits(deposits)
                } else {
                    r.clone()
                }
            })
            .collect();

        tracing::info!(target_name = target, deposits, "deposits updated");
        Self::new(records)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::seed()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Institution;
    type IntoIter = std::slice::Iter<'a, Institution>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_seven_records() {
        let store = RecordStore::seed();
        assert_eq!(store.len(), 7);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_seed_has_single_protocol() {
        let store = RecordStore::seed();
        let protocols: Vec<_> = store.iter().filter(|r| r.category.is_protocol()).collect();
        assert_eq!(protocols.len(), 1);
        assert_eq!(protocols[0].name, "Aave");
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(RecordStore::seed(), RecordStore::seed());
    }

    #[test]
    fn test_update_deposits_replaces_only_target() {
        let seed = RecordStore::seed();
        let updated = seed.update_deposits("Aave", 75.5);

        assert_eq!(updated.find("Aave").map(|r| r.deposits), Some(75.5));
        for (before, after) in seed.iter().zip(updated.iter()) {
            assert_eq!(before.rank, after.rank);
            assert_eq!(before.name, after.name);
            if before.name != "Aave" {
                assert_eq!(before.deposits.to_bits(), after.deposits.to_bits());
            }
        }
    }

    #[test]
    fn test_update_deposits_leaves_original_snapshot() {
        let seed = RecordStore::seed();
        let _ = seed.update_deposits("Aave", 1.0);
        assert_eq!(seed.find("Aave").map(|r| r.deposits), Some(67.921));
    }

    #[test]
    fn test_update_deposits_unknown_name_is_noop() {
        let seed = RecordStore::seed();
        let updated = seed.update_deposits("Compound", 10.0);
        assert_eq!(updated, seed);
    }

    #[test]
    fn test_update_deposits_does_not_rerank() {
        let updated = RecordStore::seed().update_deposits("Aave", 500.0);
        assert_eq!(updated.find("Aave").map(|r| r.rank), Some(38));
    }
}
