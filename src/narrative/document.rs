//! Backend-neutral document model and the rendering capability trait.
//!
//! The narrative builder produces a [`Document`] made of simple blocks.
//! A [`DocumentBackend`] turns that into bytes in a concrete format, so the
//! tabular and detail exporters never depend on any document tooling.

use std::io::Write;

use serde::Serialize;

use crate::error::ReportError;

use super::options::FontStyle;

/// A span of text with inline emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    /// Text content.
    pub text: String,
    /// Whether the run is bold.
    pub bold: bool,
    /// Whether the run is italic.
    pub italic: bool,
}

impl Run {
    /// Creates an unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Creates a bold run.
    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    /// Creates an italic run.
    #[must_use]
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

/// One structural element of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Section heading; level 1 is the document title.
    Heading {
        /// Nesting level, starting at 1.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Paragraph of runs.
    Paragraph {
        /// Inline runs in reading order.
        runs: Vec<Run>,
        /// Whether the paragraph is indented beneath the previous one.
        indented: bool,
    },
    /// Table with a header row.
    Table {
        /// Header cells.
        header: Vec<String>,
        /// Body rows.
        rows: Vec<Vec<String>>,
    },
    /// Forces the following content onto a new page.
    PageBreak,
}

/// An ordered sequence of blocks with a title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Returns the document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the blocks in order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Appends a heading.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
    }

    /// Appends a single-run paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.add_runs(vec![Run::plain(text)], false);
    }

    /// Appends an indented single-run paragraph.
    pub fn add_indented(&mut self, text: impl Into<String>) {
        self.add_runs(vec![Run::plain(text)], true);
    }

    /// Appends a paragraph made of several runs.
    pub fn add_runs(&mut self, runs: Vec<Run>, indented: bool) {
        self.blocks.push(Block::Paragraph { runs, indented });
    }

    /// Appends a table.
    pub fn add_table(&mut self, header: Vec<String>, rows: Vec<Vec<String>>) {
        self.blocks.push(Block::Table { header, rows });
    }

    /// Appends a page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }
}

/// A concrete output format for [`Document`]s.
pub trait DocumentBackend {
    /// Applies the default body typeface and size.
    ///
    /// This is cosmetic: callers treat any error as non-fatal.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Style`] if the backend cannot honour `font`.
    fn apply_default_style(&mut self, font: &FontStyle) -> Result<(), ReportError>;

    /// Renders `document` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Filesystem`] if writing fails, or
    /// [`ReportError::Serialization`] if the document cannot be rendered.
    fn render(&self, document: &Document, writer: &mut dyn Write) -> Result<(), ReportError>;
}

/// Converts an I/O error raised while writing a rendered document.
pub(crate) fn io_error(error: &std::io::Error) -> ReportError {
    ReportError::filesystem("failed to write report", error)
}
