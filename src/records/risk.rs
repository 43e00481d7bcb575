//! Risk classification of pair scores.

use std::fmt;

use super::PairStats;

/// Scores at or above this value are high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Scores at or above this value (and below [`HIGH_RISK_THRESHOLD`]) are
/// medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.5;

/// Risk bucket assigned to a pair from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// `score >= 0.7`.
    High,
    /// `0.5 <= score < 0.7`.
    Medium,
    /// Everything else, including non-numeric scores.
    Low,
}

impl RiskLevel {
    /// Classifies a score.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Number of pairs in each risk bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskBreakdown {
    /// Pairs classified [`RiskLevel::High`].
    pub high: usize,
    /// Pairs classified [`RiskLevel::Medium`].
    pub medium: usize,
    /// Remaining pairs.
    pub low: usize,
}

impl RiskBreakdown {
    /// Counts the risk buckets over a set of statistics.
    ///
    /// `low` is derived as the total minus the other two buckets.
    #[must_use]
    pub fn from_stats(stats: &[PairStats]) -> Self {
        let count = |level: RiskLevel| {
            stats
                .iter()
                .filter(|item| RiskLevel::classify(item.score) == level)
                .count()
        };
        let high = count(RiskLevel::High);
        let medium = count(RiskLevel::Medium);
        Self {
            high,
            medium,
            low: stats.len() - high - medium,
        }
    }
}
