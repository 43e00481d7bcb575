//! Markdown backend for narrative reports.
//!
//! Markdown has no notion of a default typeface, so the style hook accepts
//! any font and records nothing. Page breaks are emitted as an inline HTML
//! `div` that common Markdown-to-PDF converters honour.

use std::io::Write;

use crate::error::ReportError;

use super::document::{Block, Document, DocumentBackend, Run, io_error};
use super::options::FontStyle;

const PAGE_BREAK: &str = "<div style=\"page-break-after: always;\"></div>";

/// Renders documents as Markdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownBackend;

impl DocumentBackend for MarkdownBackend {
    fn apply_default_style(&mut self, _font: &FontStyle) -> Result<(), ReportError> {
        Ok(())
    }

    fn render(&self, document: &Document, writer: &mut dyn Write) -> Result<(), ReportError> {
        for block in document.blocks() {
            write_block(writer, block)?;
        }
        Ok(())
    }
}

fn write_block(writer: &mut dyn Write, block: &Block) -> Result<(), ReportError> {
    match block {
        Block::Heading { level, text } => {
            let marker = "#".repeat(usize::from((*level).clamp(1, 6)));
            writeln!(writer, "{marker} {}", escape(text)).map_err(|e| io_error(&e))?;
        }
        Block::Paragraph { runs, indented } => {
            let prefix = if *indented { "> " } else { "" };
            let body: String = runs.iter().map(render_run).collect();
            writeln!(writer, "{prefix}{body}").map_err(|e| io_error(&e))?;
        }
        Block::Table { header, rows } => write_table(writer, header, rows)?,
        Block::PageBreak => writeln!(writer, "{PAGE_BREAK}").map_err(|e| io_error(&e))?,
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

fn render_run(run: &Run) -> String {
    let text = escape(&run.text);
    // Emphasis markers must hug the text, so surrounding spaces stay outside.
    let trimmed = text.trim();
    if trimmed.is_empty() || !(run.bold || run.italic) {
        return text;
    }
    let marker = match (run.bold, run.italic) {
        (true, true) => "***",
        (true, false) => "**",
        _ => "*",
    };
    let leading = text.len() - text.trim_start().len();
    let trailing = text.len() - text.trim_end().len();
    format!(
        "{}{marker}{trimmed}{marker}{}",
        " ".repeat(leading),
        " ".repeat(trailing)
    )
}

fn write_table(
    writer: &mut dyn Write,
    header: &[String],
    rows: &[Vec<String>],
) -> Result<(), ReportError> {
    writeln!(writer, "| {} |", table_cells(header)).map_err(|e| io_error(&e))?;
    let divider = vec!["---"; header.len()].join(" | ");
    writeln!(writer, "| {divider} |").map_err(|e| io_error(&e))?;
    for row in rows {
        writeln!(writer, "| {} |", table_cells(row)).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn table_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape(cell).replace('|', "\\|"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Backslash-escapes characters that Markdown would treat as markup.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '#') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::export::test_helpers::{assert_contains, assert_not_contains};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn render_to_string(document: &Document) -> Result<String, Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        MarkdownBackend.render(document, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[rstest]
    fn renders_headings_by_level() -> TestResult {
        let mut document = Document::new("Report");
        document.add_heading("Report", 1);
        document.add_heading("Section", 3);

        let output = render_to_string(&document)?;

        assert_contains(&output, "# Report\n")?;
        assert_contains(&output, "### Section\n")?;
        Ok(())
    }

    #[rstest]
    fn emphasis_keeps_spaces_outside_markers() -> TestResult {
        let mut document = Document::new("Report");
        document.add_runs(
            vec![Run::bold("1. Similarity: 90.0%"), Run::italic(" (possible citation)")],
            false,
        );

        let output = render_to_string(&document)?;

        assert_contains(&output, "**1. Similarity: 90.0%** *(possible citation)*")?;
        Ok(())
    }

    #[rstest]
    fn indented_paragraphs_become_quotes() -> TestResult {
        let mut document = Document::new("Report");
        document.add_indented("a-1 (sent 1): text");

        assert_contains(&render_to_string(&document)?, "> a-1 (sent 1): text")?;
        Ok(())
    }

    #[rstest]
    fn table_cells_escape_pipes() -> TestResult {
        let mut document = Document::new("Report");
        document.add_table(
            vec!["pair".to_owned(), "score".to_owned()],
            vec![vec!["a|b ⟷ c".to_owned(), "0.500".to_owned()]],
        );

        let output = render_to_string(&document)?;

        assert_contains(&output, "| pair | score |\n| --- | --- |\n")?;
        assert_contains(&output, "| a\\|b ⟷ c | 0.500 |")?;
        Ok(())
    }

    #[rstest]
    fn markup_in_excerpts_is_escaped() -> TestResult {
        let mut document = Document::new("Report");
        document.add_paragraph("*not bold* <script>");

        let output = render_to_string(&document)?;

        assert_contains(&output, "\\*not bold\\* \\<script\\>")?;
        assert_not_contains(&output, "<script>")?;
        Ok(())
    }

    #[rstest]
    fn page_break_is_emitted() -> TestResult {
        let mut document = Document::new("Report");
        document.add_page_break();

        assert_contains(&render_to_string(&document)?, PAGE_BREAK)?;
        Ok(())
    }

    #[rstest]
    fn style_hook_accepts_any_font() {
        let font = FontStyle {
            family: String::new(),
            size_pt: 0,
        };

        assert_eq!(MarkdownBackend.apply_default_style(&font), Ok(()));
    }
}
