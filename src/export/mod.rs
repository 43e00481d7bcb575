//! Tabular and structured exports of comparison results.
//!
//! These exporters have no dependency on the narrative report backends and
//! are always available.
//!
//! # Supported Formats
//!
//! - **Summary tables**: CSV with fixed sentence- or paragraph-level headers
//! - **Detail export**: indented JSON wrapping every record under `"pairs"`
//! - **Evidence index**: indented JSON mapping `('A', 'B')` keys to hit lists
//!
//! # Ordering
//!
//! Records and hits are written in the order supplied. Nothing here sorts,
//! deduplicates or reorders pairs.

mod destination;
mod detail;
mod evidence;
mod tabular;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_helpers;

pub(crate) use destination::write_artifact;
pub use detail::{write_pair_results, write_pair_results_to};
pub use evidence::{EvidenceIndex, write_evidence_index_to, write_evidence_top};
pub use tabular::{
    write_paragraph_summary, write_summary_csv, write_summary_records, write_summary_table,
};
