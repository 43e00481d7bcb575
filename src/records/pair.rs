//! Ordered participant pairs and their canonical text encodings.
//!
//! Every exporter that needs a pair as text goes through the methods here so
//! that summary cells, evidence keys and report headings stay consistent.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

/// An ordered couple of participant identifiers.
///
/// The order is the one supplied by the comparison engine. Nothing in this
/// crate sorts or deduplicates the two sides, so `(a, b)` and `(b, a)` are
/// distinct pairs. Serialized as a two-element JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Creates a pair, keeping the given order.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns the first identifier.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the second identifier.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Renders the pair as a summary-table cell: `(A, B)`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("({}, {})", self.first, self.second)
    }

    /// Renders the pair for report headings and tables: `A ⟷ B`.
    #[must_use]
    pub fn arrow_label(&self) -> String {
        format!("{} ⟷ {}", self.first, self.second)
    }

    /// Renders the canonical evidence-index key: `('A', 'B')`.
    ///
    /// Downstream tooling matches on this exact text, so each identifier is
    /// quoted the way a tuple of strings is conventionally displayed: single
    /// quotes unless the identifier contains a single quote and no double
    /// quote, with backslashes, the active quote and control characters
    /// escaped.
    #[must_use]
    pub fn evidence_key(&self) -> String {
        format!("({}, {})", quote(&self.first), quote(&self.second))
    }
}

impl From<(String, String)> for Pair {
    fn from((first, second): (String, String)) -> Self {
        Self { first, second }
    }
}

impl From<Pair> for (String, String) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

impl From<(&str, &str)> for Pair {
    fn from((first, second): (&str, &str)) -> Self {
        Self::new(first, second)
    }
}

fn quote(identifier: &str) -> String {
    let delimiter = if identifier.contains('\'') && !identifier.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(identifier.len() + 2);
    quoted.push(delimiter);
    for ch in identifier.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => push_code_point_escape(&mut quoted, c),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Reports whether `ch` is shown as itself in a tuple display.
///
/// Separators other than the ASCII space are escaped, as are control,
/// format, surrogate, private-use and unassigned code points.
fn is_printable(ch: char) -> bool {
    ch == ' '
        || !matches!(
            get_general_category(ch),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::SpaceSeparator
        )
}

/// Appends the shortest hex escape for `ch`: `\xhh`, `\uhhhh` or `\Uhhhhhhhh`.
fn push_code_point_escape(quoted: &mut String, ch: char) {
    let code = u32::from(ch);
    // Writing to a String cannot fail.
    let _written = if code <= 0xff {
        write!(quoted, "\\x{code:02x}")
    } else if code <= 0xffff {
        write!(quoted, "\\u{code:04x}")
    } else {
        write!(quoted, "\\U{code:08x}")
    };
}
