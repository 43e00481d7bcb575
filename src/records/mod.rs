//! Record model shared by every exporter.
//!
//! Records are produced by the comparison engine and only read here. Summary
//! statistics and match details are independent inputs matched, if at all,
//! by equal [`Pair`] values; no exporter checks that a pair's `count` agrees
//! with the number of hits.

mod detail;
mod pair;
mod risk;
mod stats;

pub use detail::{DEFAULT_CITATION_PENALTY, Hit, PairDetail, non_finite_hit_field};
pub use pair::Pair;
pub use risk::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskBreakdown, RiskLevel};
pub use stats::{PARAGRAPH_SUMMARY_HEADER, PairStats, SENTENCE_SUMMARY_HEADER, SummaryLayout};
