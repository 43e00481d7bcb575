//! HTML backend for narrative reports.
//!
//! Renders through a bundled `minijinja` template with HTML auto-escaping.
//! Pair sections are separated by `break-after: page` markers so the report
//! paginates when printed, and the default font becomes the body CSS rule.

use std::io::Write;

use minijinja::{Environment, context};

use crate::error::ReportError;

use super::document::{Document, DocumentBackend, io_error};
use super::options::FontStyle;

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("templates/report.html");

/// Largest accepted body font size, in points.
const MAX_FONT_SIZE_PT: u16 = 72;

/// Renders documents as a standalone HTML page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlBackend {
    font: Option<FontStyle>,
}

impl HtmlBackend {
    /// Creates a backend with no default font applied.
    #[must_use]
    pub const fn new() -> Self {
        Self { font: None }
    }

    /// Returns the font applied through [`DocumentBackend::apply_default_style`].
    #[must_use]
    pub const fn font(&self) -> Option<&FontStyle> {
        self.font.as_ref()
    }
}

impl DocumentBackend for HtmlBackend {
    fn apply_default_style(&mut self, font: &FontStyle) -> Result<(), ReportError> {
        let family_is_safe = font
            .family
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == ' ' || ch == '-');
        if font.family.trim().is_empty() || !family_is_safe {
            return Err(ReportError::Style {
                message: format!("unsupported font family '{}'", font.family),
            });
        }
        if font.size_pt == 0 || font.size_pt > MAX_FONT_SIZE_PT {
            return Err(ReportError::Style {
                message: format!(
                    "font size {}pt outside 1-{MAX_FONT_SIZE_PT}pt",
                    font.size_pt
                ),
            });
        }
        self.font = Some(font.clone());
        Ok(())
    }

    fn render(&self, document: &Document, writer: &mut dyn Write) -> Result<(), ReportError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| ReportError::Serialization {
                message: format!("invalid report template: {e}"),
            })?;

        let tmpl = env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| ReportError::Serialization {
                message: format!("failed to retrieve report template: {e}"),
            })?;

        let ctx = context! {
            title => document.title(),
            font => self.font.as_ref(),
            blocks => document.blocks(),
        };

        let output = tmpl.render(ctx).map_err(|e| ReportError::Serialization {
            message: format!("report rendering failed: {e}"),
        })?;

        writer
            .write_all(output.as_bytes())
            .map_err(|e| io_error(&e))
    }
}
