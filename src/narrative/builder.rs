//! Composition of the narrative report document.

use chrono::{DateTime, Utc};

use crate::records::{Hit, PairDetail, PairStats};

use super::document::{Document, Run};
use super::options::NarrativeOptions;
use super::summary::OverallSummary;

const SUMMARY_TABLE_HEADER: [&str; 4] = ["pair", "matches", "mean_sim", "score"];

/// Builds the narrative report for the given statistics and details.
///
/// `stats` drive the overall summary and compact table; `details` drive the
/// per-pair sections, in their own order. The two inputs are not matched
/// against each other. At most `options.top_n_per_pair` hits are rendered
/// per pair, taken from the front of each hit list without reordering.
#[must_use]
pub fn build_narrative(
    stats: &[PairStats],
    details: &[PairDetail],
    options: &NarrativeOptions,
    generated_at: DateTime<Utc>,
) -> Document {
    let mut document = Document::new(options.title.as_str());
    document.add_heading(options.title.as_str(), 1);
    document.add_paragraph(format!("Generated: {}", generated_at.to_rfc3339()));

    add_overall_summary(&mut document, stats);
    add_pair_sections(&mut document, details, options.top_n_per_pair);

    document
}

fn add_overall_summary(document: &mut Document, stats: &[PairStats]) {
    let summary = OverallSummary::from_stats(stats);

    document.add_heading("1. Overall Summary", 2);
    document.add_paragraph(format!("Pairs analyzed: {}", summary.total_pairs));
    document.add_paragraph(format!(
        "Total matching sentences found: {}",
        summary.total_matches
    ));
    document.add_paragraph(format!(
        "Average pair mean similarity: {:.3}",
        summary.avg_pair_sim
    ));
    document.add_paragraph(format!(
        "Risk breakdown: High={}, Medium={}, Low={}",
        summary.risk.high, summary.risk.medium, summary.risk.low
    ));

    let rows = stats
        .iter()
        .map(|item| {
            vec![
                item.pair.arrow_label(),
                item.count.to_string(),
                format!("{:.3}", item.mean_sim),
                format!("{:.3}", item.score),
            ]
        })
        .collect();
    document.add_table(SUMMARY_TABLE_HEADER.map(str::to_owned).to_vec(), rows);
}

fn add_pair_sections(document: &mut Document, details: &[PairDetail], top_n_per_pair: usize) {
    document.add_heading("2. Sentence-level Comparisons", 2);
    if details.is_empty() {
        document.add_paragraph("No detailed pair results available.");
        return;
    }

    for (number, detail) in details.iter().enumerate() {
        add_pair_section(document, number + 1, detail, top_n_per_pair);
        document.add_page_break();
    }
}

fn add_pair_section(
    document: &mut Document,
    number: usize,
    detail: &PairDetail,
    top_n_per_pair: usize,
) {
    document.add_heading(format!("Pair {number}: {}", detail.pair.arrow_label()), 3);
    document.add_paragraph(format!(
        "Matches: {}    Avg sim: {:.3}    Score: {:.3}",
        detail.count, detail.mean_sim, detail.score
    ));

    let shown: Vec<&Hit> = detail.hits.iter().take(top_n_per_pair).collect();
    if shown.is_empty() {
        document.add_indented("No sentence-level hits.");
        return;
    }
    for (rank, hit) in shown.into_iter().enumerate() {
        add_hit(document, rank + 1, hit);
    }
}

fn add_hit(document: &mut Document, rank: usize, hit: &Hit) {
    let mut runs = vec![Run::bold(format!(
        "{rank}. Similarity: {}",
        percent(hit.effective_sim())
    ))];
    if hit.is_possible_citation() {
        runs.push(Run::italic(" (possible citation)"));
    }
    document.add_runs(runs, false);

    document.add_indented(format!(
        "{} (sent {}): {}",
        hit.sid_i,
        hit.sent_id_i,
        collapse_excerpt(&hit.text_i)
    ));
    document.add_indented(format!(
        "{} (sent {}): {}",
        hit.sid_j,
        hit.sent_id_j,
        collapse_excerpt(&hit.text_j)
    ));
}

#[expect(
    clippy::float_arithmetic,
    reason = "similarity fraction shown as a percentage"
)]
fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Replaces line breaks with spaces and trims surrounding whitespace.
fn collapse_excerpt(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_owned()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
