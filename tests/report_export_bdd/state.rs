//! Scenario state for the report export BDD tests.

use plagiarism_report::{PairDetail, PairStats, ReportError};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

/// Scenario state for report export tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ReportExportState {
    /// Directory receiving exported files.
    pub(crate) workdir: Slot<TempDir>,
    /// Statistics records accumulated by `Given` steps.
    pub(crate) stats: Slot<Vec<PairStats>>,
    /// Detail records accumulated by `Given` steps.
    pub(crate) details: Slot<Vec<PairDetail>>,
    /// Hit limit for the narrative report.
    pub(crate) top_n_per_pair: Slot<usize>,
    /// Contents of the exported file under test.
    pub(crate) output: Slot<String>,
    /// Error from the export under test.
    pub(crate) error: Slot<ReportError>,
}

impl ReportExportState {
    /// Returns the accumulated statistics records.
    pub(crate) fn stats(&self) -> Vec<PairStats> {
        self.stats.get().unwrap_or_default()
    }

    /// Returns the accumulated detail records.
    pub(crate) fn details(&self) -> Vec<PairDetail> {
        self.details.get().unwrap_or_default()
    }
}
