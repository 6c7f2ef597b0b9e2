//! Quota level classification
//!
//! Pure functions: a per-quota level from current vs. baseline value, and a
//! per-model aggregate across quota dimensions. The three-tier comparison is
//! the canonical formula; anything missing classifies as `Unknown`, never an
//! error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a quota relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuotaLevel {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl QuotaLevel {
    /// Severity rank for worst-of aggregation; lower rank is more constrained
    fn severity(self) -> Option<u8> {
        match self {
            Self::Low => Some(0),
            Self::Medium => Some(1),
            Self::High => Some(2),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for QuotaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Classify one quota value against its baseline
///
/// Strict three-way comparison, no tolerance: below baseline is `Low`,
/// exactly baseline is `Medium`, above baseline is `High`. A missing value
/// on either side is `Unknown`.
pub fn classify(current: Option<f64>, baseline: Option<f64>) -> QuotaLevel {
    let (current, baseline) = match (current, baseline) {
        (Some(c), Some(b)) => (c, b),
        _ => return QuotaLevel::Unknown,
    };

    if current < baseline {
        QuotaLevel::Low
    } else if current == baseline {
        QuotaLevel::Medium
    } else {
        QuotaLevel::High
    }
}

/// Aggregate per-quota levels into one per-model level
///
/// Worst-of with precedence low > medium > high. `Unknown` entries are
/// excluded; if every entry is `Unknown` (or there are none), the aggregate
/// is `Unknown`.
pub fn aggregate(levels: impl IntoIterator<Item = QuotaLevel>) -> QuotaLevel {
    levels
        .into_iter()
        .filter_map(|level| level.severity().map(|rank| (rank, level)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, level)| level)
        .unwrap_or(QuotaLevel::Unknown)
}
