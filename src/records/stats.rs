//! Per-pair summary statistics and the fixed summary-table layouts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ReportError;

use super::Pair;

/// Column headers of the sentence-level summary table.
pub const SENTENCE_SUMMARY_HEADER: [&str; 10] = [
    "pair",
    "count",
    "mean_sim",
    "max_sim",
    "coverage_min",
    "coverage_a",
    "coverage_b",
    "student_a_sent_total",
    "student_b_sent_total",
    "score",
];

/// Column headers of the paragraph-level summary table.
pub const PARAGRAPH_SUMMARY_HEADER: [&str; 10] = [
    "pair",
    "count",
    "mean_sim",
    "max_sim",
    "coverage_min",
    "coverage_a",
    "coverage_b",
    "student_a_para_total",
    "student_b_para_total",
    "score",
];

/// Granularity of the units counted in a summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLayout {
    /// Totals count sentences.
    Sentence,
    /// Totals count paragraphs.
    Paragraph,
}

impl SummaryLayout {
    /// Returns the fixed header row for this layout.
    #[must_use]
    pub const fn header(self) -> &'static [&'static str; 10] {
        match self {
            Self::Sentence => &SENTENCE_SUMMARY_HEADER,
            Self::Paragraph => &PARAGRAPH_SUMMARY_HEADER,
        }
    }

    const fn total_columns(self) -> (&'static str, &'static str) {
        match self {
            Self::Sentence => ("student_a_sent_total", "student_b_sent_total"),
            Self::Paragraph => ("student_a_para_total", "student_b_para_total"),
        }
    }
}

/// Summary statistics for one compared pair.
///
/// Values are taken as produced upstream; similarity and coverage fields are
/// expected in `[0, 1]` but are never clamped or validated here.
///
/// Deserialization is lenient: absent fields take their zero value, and the
/// unit totals accept either the sentence or the paragraph column name. Use
/// [`PairStats::from_record`] when every column must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairStats {
    /// The compared pair, in upstream order.
    pub pair: Pair,
    /// Number of matched segments.
    pub count: u64,
    /// Mean similarity over the matches.
    pub mean_sim: f64,
    /// Highest similarity over the matches.
    pub max_sim: f64,
    /// Smaller of the two coverage values.
    pub coverage_min: f64,
    /// Fraction of the first document's units involved in a match.
    pub coverage_a: f64,
    /// Fraction of the second document's units involved in a match.
    pub coverage_b: f64,
    /// Unit count of the first document.
    #[serde(alias = "student_a_sent_total", alias = "student_a_para_total")]
    pub student_a_total: u64,
    /// Unit count of the second document.
    #[serde(alias = "student_b_sent_total", alias = "student_b_para_total")]
    pub student_b_total: u64,
    /// Aggregate risk score.
    pub score: f64,
}

impl PairStats {
    /// Builds statistics from a loosely typed record, requiring every column
    /// of `layout`.
    ///
    /// Keys outside the layout are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Schema`] when a column is absent or holds a
    /// value of the wrong shape.
    pub fn from_record(record: &Map<String, Value>, layout: SummaryLayout) -> Result<Self, ReportError> {
        let (a_total, b_total) = layout.total_columns();
        Ok(Self {
            pair: pair_column(record)?,
            count: count_column(record, "count")?,
            mean_sim: float_column(record, "mean_sim")?,
            max_sim: float_column(record, "max_sim")?,
            coverage_min: float_column(record, "coverage_min")?,
            coverage_a: float_column(record, "coverage_a")?,
            coverage_b: float_column(record, "coverage_b")?,
            student_a_total: count_column(record, a_total)?,
            student_b_total: count_column(record, b_total)?,
            score: float_column(record, "score")?,
        })
    }
}

fn column<'a>(record: &'a Map<String, Value>, name: &str) -> Result<&'a Value, ReportError> {
    record.get(name).ok_or_else(|| ReportError::Schema {
        message: format!("record is missing column '{name}'"),
    })
}

fn pair_column(record: &Map<String, Value>) -> Result<Pair, ReportError> {
    let malformed = || ReportError::Schema {
        message: "column 'pair' must be a two-element array".to_owned(),
    };
    match column(record, "pair")? {
        Value::Array(items) => match items.as_slice() {
            [first, second] => Ok(Pair::new(identifier(first), identifier(second))),
            _ => Err(malformed()),
        },
        _ => Err(malformed()),
    }
}

fn identifier(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn count_column(record: &Map<String, Value>, name: &str) -> Result<u64, ReportError> {
    column(record, name)?
        .as_u64()
        .ok_or_else(|| ReportError::Schema {
            message: format!("column '{name}' must be a non-negative integer"),
        })
}

fn float_column(record: &Map<String, Value>, name: &str) -> Result<f64, ReportError> {
    column(record, name)?
        .as_f64()
        .ok_or_else(|| ReportError::Schema {
            message: format!("column '{name}' must be a number"),
        })
}
