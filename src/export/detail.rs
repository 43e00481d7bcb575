//! Full per-pair detail export.
//!
//! Writes every [`PairDetail`] under a single top-level `"pairs"` key as
//! indented JSON. Field order follows the record definitions and non-ASCII
//! text is written verbatim, so successive exports diff cleanly. Records
//! holding NaN or an infinity are refused, since JSON cannot represent them.

use std::io::Write;

use camino::Utf8Path;
use serde::Serialize;

use crate::error::ReportError;
use crate::records::PairDetail;

use super::destination::write_artifact;

#[derive(Serialize)]
struct PairResults<'a> {
    pairs: &'a [PairDetail],
}

/// Writes the detail export to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if the destination cannot be created
/// or written, or [`ReportError::Serialization`] if a record holds a
/// non-finite number. Nothing is written in that case.
pub fn write_pair_results(path: &Utf8Path, details: &[PairDetail]) -> Result<(), ReportError> {
    ensure_finite(details)?;
    write_artifact(path, "detail export", |writer| write_json(writer, details))?;
    tracing::info!(path = %path, pairs = details.len(), "wrote detail export");
    Ok(())
}

/// Writes the detail export to the given writer.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if writing fails, or
/// [`ReportError::Serialization`] before anything is written if a record
/// holds a non-finite number.
pub fn write_pair_results_to<W: Write>(
    writer: &mut W,
    details: &[PairDetail],
) -> Result<(), ReportError> {
    ensure_finite(details)?;
    write_json(writer, details)
}

fn write_json<W: Write>(writer: &mut W, details: &[PairDetail]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, &PairResults { pairs: details })?;
    Ok(())
}

fn ensure_finite(details: &[PairDetail]) -> Result<(), ReportError> {
    details
        .iter()
        .enumerate()
        .find_map(|(index, detail)| {
            detail.non_finite_field().map(|field| {
                ReportError::non_finite(
                    format_args!("record {index} {}", detail.pair.evidence_key()),
                    &field,
                )
            })
        })
        .map_or(Ok(()), Err)
}
