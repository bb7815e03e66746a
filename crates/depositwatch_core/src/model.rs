//! Institution records.

use serde::{Deserialize, Serialize};

/// Kind of institution a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Traditional bank holding company
    Institution,
    /// DeFi lending protocol tracked against the banks
    Protocol,
}

impl Category {
    /// Long display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Institution => "Traditional Bank",
            Self::Protocol => "DeFi Protocol",
        }
    }

    /// Short badge shown next to protocol names, if any
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Institution => None,
            Self::Protocol => Some("DeFi"),
        }
    }

    /// Whether this is the protocol category
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol)
    }
}

/// One row of the dataset.
///
/// `rank` is a stored snapshot of the ordering at capture time. It is not
/// recomputed when `deposits` changes, so it can go stale after an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    /// Relative size ordering at data-capture time
    pub rank: u32,
    /// Display name, unique within a store
    pub name: String,
    /// Deposits in US$ billions
    pub deposits: f64,
    /// Bank or protocol
    pub category: Category,
}

impl Institution {
    /// Create a new record
    pub fn new(rank: u32, name: impl Into<String>, deposits: f64, category: Category) -> Self {
        Self {
            rank,
            name: name.into(),
            deposits,
            category,
        }
    }

    /// Copy of this record with `deposits` replaced
    pub fn with_deposits(&self, deposits: f64) -> Self {
        Self {
            deposits,
            ..self.clone()
        }
    }
}
