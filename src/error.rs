//! Error types exposed by the report exporters.

use thiserror::Error;

/// Errors surfaced while projecting records or persisting report artifacts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The destination could not be created, written or flushed.
    #[error("filesystem error: {message}")]
    Filesystem {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// A record lacks a column required by the fixed output layout.
    #[error("schema error: {message}")]
    Schema {
        /// Description of the missing or malformed field.
        message: String,
    },

    /// A value could not be represented in the target text format.
    #[error("serialization error: {message}")]
    Serialization {
        /// Serializer error detail.
        message: String,
    },

    /// A document backend could not apply cosmetic styling.
    ///
    /// The narrative builder logs and discards this error; it never reaches
    /// callers of [`crate::write_narrative_report`].
    #[error("style error: {message}")]
    Style {
        /// Details about the rejected style.
        message: String,
    },

    /// Report options were invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ReportError {
    /// Wraps an I/O failure with the operation and path it concerned.
    pub(crate) fn filesystem(context: impl std::fmt::Display, error: &std::io::Error) -> Self {
        Self::Filesystem {
            message: format!("{context}: {error}"),
        }
    }

    /// Reports a float field that JSON cannot represent.
    pub(crate) fn non_finite(context: impl std::fmt::Display, field: &str) -> Self {
        Self::Serialization {
            message: format!("{context}: field '{field}' is not a finite number"),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return Self::Filesystem {
                message: error.to_string(),
            };
        }
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return Self::Filesystem {
                message: error.to_string(),
            };
        }
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
