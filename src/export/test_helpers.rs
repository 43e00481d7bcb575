//! Shared test utilities for export tests.
//!
//! This module provides record builders and assertions used by the unit
//! tests and, through the `test-support` feature, by the integration tests.

use crate::records::{Hit, Pair, PairDetail, PairStats};

/// Test data constants to reduce string argument repetition.
pub mod test_data {
    /// First participant of the sample pair.
    pub const ALICE: &str = "alice";
    /// Second participant of the sample pair.
    pub const BOB: &str = "bob";
    /// Excerpt containing CJK text and an embedded line break.
    pub const CJK_EXCERPT: &str = "抄袭检测\n示例句子";
    /// Excerpt with an accented Latin word and surrounding whitespace.
    pub const ACCENTED_EXCERPT: &str = "  Le café est fermé.  ";
}

/// Builds the statistics record used by the worked alice/bob example.
#[must_use]
pub fn alice_bob_stats() -> PairStats {
    StatsBuilder::new(test_data::ALICE, test_data::BOB)
        .count(3)
        .mean_sim(0.62)
        .max_sim(0.9)
        .coverage(0.1, 0.2, 0.3)
        .totals(10, 12)
        .score(0.55)
        .build()
}

/// Builder for creating test [`PairStats`] instances with a fluent API.
#[must_use]
pub struct StatsBuilder {
    stats: PairStats,
}

impl StatsBuilder {
    /// Creates a builder for the given pair with zeroed statistics.
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            stats: PairStats {
                pair: Pair::new(first, second),
                ..PairStats::default()
            },
        }
    }

    /// Sets the match count.
    pub const fn count(mut self, count: u64) -> Self {
        self.stats.count = count;
        self
    }

    /// Sets the mean similarity.
    pub const fn mean_sim(mut self, mean_sim: f64) -> Self {
        self.stats.mean_sim = mean_sim;
        self
    }

    /// Sets the maximum similarity.
    pub const fn max_sim(mut self, max_sim: f64) -> Self {
        self.stats.max_sim = max_sim;
        self
    }

    /// Sets the three coverage values.
    pub const fn coverage(mut self, min: f64, a: f64, b: f64) -> Self {
        self.stats.coverage_min = min;
        self.stats.coverage_a = a;
        self.stats.coverage_b = b;
        self
    }

    /// Sets both unit totals.
    pub const fn totals(mut self, a: u64, b: u64) -> Self {
        self.stats.student_a_total = a;
        self.stats.student_b_total = b;
        self
    }

    /// Sets the risk score.
    pub const fn score(mut self, score: f64) -> Self {
        self.stats.score = score;
        self
    }

    /// Builds the [`PairStats`] with configured values.
    #[must_use]
    pub fn build(self) -> PairStats {
        self.stats
    }
}

/// Builder for creating test [`Hit`] instances with a fluent API.
#[must_use]
pub struct HitBuilder {
    hit: Hit,
}

impl HitBuilder {
    /// Creates a hit between segment `index` on both sides.
    pub fn new(index: u64) -> Self {
        Self {
            hit: Hit {
                sid_i: format!("a-{index}"),
                sid_j: format!("b-{index}"),
                sent_id_i: index,
                sent_id_j: index,
                text_i: format!("left excerpt {index}"),
                text_j: format!("right excerpt {index}"),
                ..Hit::default()
            },
        }
    }

    /// Sets both excerpts.
    pub fn texts(mut self, text_i: &str, text_j: &str) -> Self {
        text_i.clone_into(&mut self.hit.text_i);
        text_j.clone_into(&mut self.hit.text_j);
        self
    }

    /// Sets the raw similarity.
    pub const fn sim(mut self, sim: f64) -> Self {
        self.hit.sim = sim;
        self
    }

    /// Sets the adjusted similarity.
    pub const fn adjusted_sim(mut self, adjusted_sim: f64) -> Self {
        self.hit.adjusted_sim = Some(Some(adjusted_sim));
        self
    }

    /// Sets the citation penalty.
    pub const fn citation_penalty(mut self, citation_penalty: f64) -> Self {
        self.hit.citation_penalty = Some(citation_penalty);
        self
    }

    /// Builds the [`Hit`] with configured values.
    #[must_use]
    pub fn build(self) -> Hit {
        self.hit
    }
}

/// Builder for creating test [`PairDetail`] instances with a fluent API.
#[must_use]
pub struct DetailBuilder {
    detail: PairDetail,
}

impl DetailBuilder {
    /// Creates a builder for the given pair with no hits.
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            detail: PairDetail {
                pair: Pair::new(first, second),
                ..PairDetail::default()
            },
        }
    }

    /// Sets the reported match count.
    pub const fn count(mut self, count: u64) -> Self {
        self.detail.count = count;
        self
    }

    /// Sets the mean similarity.
    pub const fn mean_sim(mut self, mean_sim: f64) -> Self {
        self.detail.mean_sim = mean_sim;
        self
    }

    /// Sets the risk score.
    pub const fn score(mut self, score: f64) -> Self {
        self.detail.score = score;
        self
    }

    /// Appends a hit.
    pub fn hit(mut self, hit: Hit) -> Self {
        self.detail.hits.push(hit);
        self
    }

    /// Builds the [`PairDetail`] with configured values.
    #[must_use]
    pub fn build(self) -> PairDetail {
        self.detail
    }
}

/// Asserts that `haystack` contains `needle`, returning an error if not.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is absent.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "expected output to contain '{needle}', got:\n{haystack}"
        ))
    }
}

/// Asserts that `haystack` does NOT contain `needle`, returning an error if it does.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is present.
pub fn assert_not_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Err(format!(
            "expected output to NOT contain '{needle}', got:\n{haystack}"
        ))
    } else {
        Ok(())
    }
}
