//! Report exports for pairwise plagiarism comparison results.
//!
//! The library turns statistics and matched-text evidence computed by a
//! comparison engine into files for reviewers and downstream tooling:
//!
//! - sentence- and paragraph-level CSV summary tables
//!   ([`write_summary_csv`], [`write_paragraph_summary`]);
//! - a full JSON detail export and a JSON evidence index keyed by pair
//!   ([`write_pair_results`], [`write_evidence_top`]);
//! - a paginated narrative report rendered through a pluggable
//!   [`DocumentBackend`] ([`write_narrative_report`]).
//!
//! Each exporter is independent, synchronous and overwrites its destination.
//! Records are never reordered and statistics are never reconciled against
//! details.

pub mod error;
pub mod export;
pub mod narrative;
pub mod records;

pub use error::ReportError;
pub use export::{
    EvidenceIndex, write_evidence_index_to, write_evidence_top, write_pair_results,
    write_pair_results_to, write_paragraph_summary, write_summary_csv, write_summary_records,
    write_summary_table,
};
#[cfg(feature = "html")]
pub use narrative::{HtmlBackend, write_html_report};
pub use narrative::{
    Document, DocumentBackend, FontStyle, MarkdownBackend, NarrativeOptions, OverallSummary,
    build_narrative, write_narrative_report,
};
pub use records::{
    Hit, Pair, PairDetail, PairStats, RiskBreakdown, RiskLevel, SummaryLayout,
};
