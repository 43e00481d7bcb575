//! Overall summary figures for the narrative report.

use crate::records::{PairStats, RiskBreakdown};

/// Aggregates over every compared pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallSummary {
    /// Number of statistics records.
    pub total_pairs: usize,
    /// Sum of the per-pair match counts.
    pub total_matches: u64,
    /// Mean of the per-pair mean similarities; `0.0` when there are no pairs.
    pub avg_pair_sim: f64,
    /// Pairs per risk bucket.
    pub risk: RiskBreakdown,
}

impl OverallSummary {
    /// Computes the summary over `stats`.
    #[must_use]
    pub fn from_stats(stats: &[PairStats]) -> Self {
        Self {
            total_pairs: stats.len(),
            total_matches: stats.iter().map(|item| item.count).sum(),
            avg_pair_sim: mean(stats.iter().map(|item| item.mean_sim), stats.len()),
            risk: RiskBreakdown::from_stats(stats),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging similarities; pair counts stay far below 2^52"
)]
fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}
