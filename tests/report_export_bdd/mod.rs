//! Support modules for the report export BDD tests.

pub(crate) mod harness;
#[path = "../support/mod.rs"]
pub(crate) mod support;
pub(crate) mod state;

pub(crate) use harness::detail_with_hits;
pub(crate) use state::ReportExportState;
