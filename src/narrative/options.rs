//! Narrative report options.
//!
//! Options deserialize from any serde format with every field optional:
//!
//! ```json
//! {
//!   "title": "Plagiarism Detection Report",
//!   "top_n_per_pair": 5,
//!   "font": { "family": "Arial", "size_pt": 11 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Default number of hits rendered per pair.
pub const DEFAULT_TOP_N_PER_PAIR: usize = 5;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Plagiarism Detection Report";

/// Default typeface and size applied to body text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FontStyle {
    /// Typeface family name.
    pub family: String,
    /// Size in points.
    pub size_pt: u16,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "Arial".to_owned(),
            size_pt: 11,
        }
    }
}

/// Settings for [`crate::write_narrative_report`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NarrativeOptions {
    /// Document title shown as the top-level heading.
    pub title: String,
    /// Maximum number of hits rendered per pair, taken from the front of
    /// each pair's hit list.
    pub top_n_per_pair: usize,
    /// Default body font. Applied best-effort by the backend.
    pub font: FontStyle,
}

impl Default for NarrativeOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            top_n_per_pair: DEFAULT_TOP_N_PER_PAIR,
            font: FontStyle::default(),
        }
    }
}

impl NarrativeOptions {
    /// Returns a copy with a different hit limit.
    #[must_use]
    pub fn with_top_n_per_pair(mut self, top_n_per_pair: usize) -> Self {
        self.top_n_per_pair = top_n_per_pair;
        self
    }

    /// Checks the options that structurally affect the document.
    ///
    /// Font settings are not checked here; backends validate them when
    /// applying the style, and a rejected style does not stop generation.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] if the title is blank.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.title.trim().is_empty() {
            return Err(ReportError::Configuration {
                message: "report title must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn defaults_match_documented_values() {
        let options = NarrativeOptions::default();

        assert_eq!(options.top_n_per_pair, 5);
        assert_eq!(options.title, "Plagiarism Detection Report");
        assert_eq!(options.font.family, "Arial");
        assert_eq!(options.font.size_pt, 11);
    }

    #[rstest]
    fn partial_input_keeps_remaining_defaults() -> Result<(), serde_json::Error> {
        let options: NarrativeOptions =
            serde_json::from_value(json!({ "top_n_per_pair": 2, "font": { "size_pt": 9 } }))?;

        assert_eq!(options.top_n_per_pair, 2);
        assert_eq!(options.font.family, "Arial");
        assert_eq!(options.font.size_pt, 9);
        assert_eq!(options.title, DEFAULT_TITLE);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_title_is_rejected(#[case] title: &str) {
        let options = NarrativeOptions {
            title: title.to_owned(),
            ..NarrativeOptions::default()
        };

        assert!(matches!(
            options.validate(),
            Err(ReportError::Configuration { .. })
        ));
    }
}
