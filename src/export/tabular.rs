//! Delimited summary tables of per-pair statistics.
//!
//! Each table starts with a fixed header row followed by one row per input
//! record, in input order. Records are projected onto the header columns
//! explicitly, so any extra upstream fields never reach the output.

use std::io::Write;

use camino::Utf8Path;
use serde_json::Value;

use crate::error::ReportError;
use crate::records::{PairStats, SummaryLayout};

use super::destination::write_artifact;

/// Writes the sentence-level summary table to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if the destination cannot be created
/// or written.
pub fn write_summary_csv(path: &Utf8Path, stats: &[PairStats]) -> Result<(), ReportError> {
    write_summary_file(path, stats, SummaryLayout::Sentence)
}

/// Writes the paragraph-level summary table to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if the destination cannot be created
/// or written.
pub fn write_paragraph_summary(path: &Utf8Path, stats: &[PairStats]) -> Result<(), ReportError> {
    write_summary_file(path, stats, SummaryLayout::Paragraph)
}

/// Writes a summary table from loosely typed JSON records.
///
/// Every record must be an object carrying all columns of `layout`; keys
/// outside the layout are ignored. Nothing is written unless every record
/// projects cleanly.
///
/// # Errors
///
/// Returns [`ReportError::Schema`] naming the first offending record, or
/// [`ReportError::Filesystem`] if the destination cannot be written.
pub fn write_summary_records(
    path: &Utf8Path,
    records: &[Value],
    layout: SummaryLayout,
) -> Result<(), ReportError> {
    let stats = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let object = record.as_object().ok_or_else(|| ReportError::Schema {
                message: format!("record {index} is not an object"),
            })?;
            PairStats::from_record(object, layout).map_err(|error| match error {
                ReportError::Schema { message } => ReportError::Schema {
                    message: format!("record {index}: {message}"),
                },
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    write_summary_file(path, &stats, layout)
}

/// Writes a summary table in `layout` to the given writer.
///
/// Rows are terminated with CRLF and cells are quoted only when they contain
/// a delimiter, quote or line break.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if writing to the output fails.
pub fn write_summary_table<W: Write>(
    writer: &mut W,
    stats: &[PairStats],
    layout: SummaryLayout,
) -> Result<(), ReportError> {
    let mut table = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    table.write_record(layout.header())?;
    for item in stats {
        table.write_record(summary_row(item))?;
    }
    table
        .flush()
        .map_err(|error| ReportError::filesystem("failed to flush summary table", &error))
}

fn write_summary_file(
    path: &Utf8Path,
    stats: &[PairStats],
    layout: SummaryLayout,
) -> Result<(), ReportError> {
    write_artifact(path, "summary table", |writer| {
        write_summary_table(writer, stats, layout)
    })?;
    tracing::info!(path = %path, rows = stats.len(), ?layout, "wrote summary table");
    Ok(())
}

/// Projects a record onto the fixed column order shared by both layouts.
fn summary_row(stats: &PairStats) -> [String; 10] {
    [
        stats.pair.summary_label(),
        stats.count.to_string(),
        float_cell(stats.mean_sim),
        float_cell(stats.max_sim),
        float_cell(stats.coverage_min),
        float_cell(stats.coverage_a),
        float_cell(stats.coverage_b),
        stats.student_a_total.to_string(),
        stats.student_b_total.to_string(),
        float_cell(stats.score),
    ]
}

/// Shortest round-trip text, keeping `.0` on integral values.
fn float_cell(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
#[path = "tabular_tests.rs"]
mod tests;
