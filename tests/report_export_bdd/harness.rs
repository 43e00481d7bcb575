//! Test data generators for report export BDD tests.

use plagiarism_report::PairDetail;
use plagiarism_report::export::test_helpers::{DetailBuilder, HitBuilder};

/// Generates a detail record with `count` hits of descending similarity.
pub(crate) fn detail_with_hits(first: &str, second: &str, count: u64) -> PairDetail {
    (1..=count)
        .fold(DetailBuilder::new(first, second).count(count), |builder, index| {
            let sim = 1.0 / (1.0 + f64::from(u32::try_from(index).unwrap_or(u32::MAX)));
            builder.hit(HitBuilder::new(index).sim(sim).build())
        })
        .build()
}
