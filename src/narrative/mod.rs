//! Narrative report generation.
//!
//! The report has a title and generation timestamp, an "Overall Summary"
//! section (pair and match counts, average similarity, risk breakdown and a
//! compact table) and a "Sentence-level Comparisons" section with one
//! page-broken subsection per detail record.
//!
//! Documents are built as backend-neutral [`Document`] values and rendered
//! by a [`DocumentBackend`]. [`MarkdownBackend`] is always available;
//! [`HtmlBackend`] requires the `html` feature (enabled by default).
//!
//! # Styling
//!
//! Applying the default font is cosmetic. If the backend rejects it the
//! failure is logged at `warn` level and generation continues unstyled.
//! Failures to render or persist the document are returned to the caller.

mod builder;
mod document;
#[cfg(feature = "html")]
mod html;
mod markdown;
mod options;
mod summary;

use camino::Utf8Path;
use chrono::Utc;

pub use builder::build_narrative;
pub use document::{Block, Document, DocumentBackend, Run};
#[cfg(feature = "html")]
pub use html::HtmlBackend;
pub use markdown::MarkdownBackend;
pub use options::{DEFAULT_TITLE, DEFAULT_TOP_N_PER_PAIR, FontStyle, NarrativeOptions};
pub use summary::OverallSummary;

use crate::error::ReportError;
use crate::export::write_artifact;
use crate::records::{PairDetail, PairStats};

/// Builds the narrative report and writes it to `path` through `backend`.
///
/// Missing parent directories are created and an existing file is
/// overwritten. The embedded generation timestamp is the current UTC time.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] for invalid options,
/// [`ReportError::Filesystem`] if the destination cannot be written, or
/// [`ReportError::Serialization`] if the backend cannot render the document.
pub fn write_narrative_report(
    path: &Utf8Path,
    stats: &[PairStats],
    details: &[PairDetail],
    options: &NarrativeOptions,
    backend: &mut dyn DocumentBackend,
) -> Result<(), ReportError> {
    options.validate()?;
    apply_style_best_effort(backend, options);

    let document = build_narrative(stats, details, options, Utc::now());
    write_artifact(path, "narrative report", |writer| {
        backend.render(&document, writer)
    })?;

    tracing::info!(
        path = %path,
        pairs = stats.len(),
        sections = details.len(),
        "wrote narrative report"
    );
    Ok(())
}

/// Writes the narrative report as HTML with the default styling.
///
/// # Errors
///
/// See [`write_narrative_report`].
#[cfg(feature = "html")]
pub fn write_html_report(
    path: &Utf8Path,
    stats: &[PairStats],
    details: &[PairDetail],
    options: &NarrativeOptions,
) -> Result<(), ReportError> {
    write_narrative_report(path, stats, details, options, &mut HtmlBackend::new())
}

fn apply_style_best_effort(backend: &mut dyn DocumentBackend, options: &NarrativeOptions) {
    if let Err(error) = backend.apply_default_style(&options.font) {
        tracing::warn!(
            %error,
            family = %options.font.family,
            size_pt = options.font.size_pt,
            "default report style not applied; continuing unstyled"
        );
    }
}
