//! Diagnostic reporting for errgen
//!
//! Every failure is a [`GenError`] carrying a stable error code. Errors that
//! point into the input document keep the source text and labelled spans, so
//! they render with context through miette, or as a JSON [`Report`].

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::Serialize;
use std::fmt;
use std::io;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

use crate::document::SourceFile;

pub mod error_codes;
pub use error_codes::explain;

/// Result alias used throughout the crate
pub type Result<T, E = GenError> = std::result::Result<T, E>;

/// A labelled region of the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Label text
    pub text: String,

    /// Byte range in the source
    #[serde(skip)]
    pub span: Range<usize>,

    /// Start line (1-indexed)
    pub line: usize,

    /// Start column (1-indexed)
    pub column: usize,
}

/// A diagnostic attached to a location in the input document
#[derive(Debug)]
pub struct SourceDiagnostic {
    /// Stable error code (e.g., "E0101")
    pub code: &'static str,

    /// Primary message
    pub message: String,

    /// Path of the input document
    pub file: PathBuf,

    /// Labelled spans, primary first
    pub labels: Vec<Label>,

    /// Optional hint for fixing the input
    pub help: Option<String>,

    source: NamedSource<String>,
}

impl SourceDiagnostic {
    /// The first label, which marks the primary location
    pub fn primary(&self) -> Option<&Label> {
        self.labels.first()
    }
}

impl fmt::Display for SourceDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceDiagnostic {}

/// Builder for [`SourceDiagnostic`], created with [`SourceFile::diagnostic`]
pub struct DiagnosticBuilder<'a> {
    source: &'a SourceFile,
    code: &'static str,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl<'a> DiagnosticBuilder<'a> {
    pub(crate) fn new(source: &'a SourceFile, code: &'static str, message: String) -> Self {
        Self {
            source,
            code,
            message,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Add a labelled span
    pub fn label(mut self, span: Range<usize>, text: impl Into<String>) -> Self {
        let (line, column) = self.source.line_col(span.start);
        self.labels.push(Label {
            text: text.into(),
            span,
            line,
            column,
        });
        self
    }

    /// Set the help text
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> SourceDiagnostic {
        SourceDiagnostic {
            code: self.code,
            message: self.message,
            file: self.source.path().to_path_buf(),
            labels: self.labels,
            help: self.help,
            source: self.source.named(),
        }
    }

    /// Build as a [`GenError::Parse`]
    pub fn parse_error(self) -> GenError {
        GenError::Parse(self.build())
    }

    /// Build as a [`GenError::Validation`]
    pub fn validation_error(self) -> GenError {
        GenError::Validation(self.build())
    }

    /// Build as a [`GenError::Render`]
    pub fn render_error(self) -> GenError {
        GenError::Render(self.build())
    }
}

/// Everything that can abort a generator run
#[derive(Debug, Error)]
pub enum GenError {
    /// The input document could not be read
    #[error("could not read `{}`: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not well-formed
    #[error("{0}")]
    Parse(SourceDiagnostic),

    /// A record is missing a field or has one of the wrong type
    #[error("{0}")]
    Validation(SourceDiagnostic),

    /// An identifier or message cannot be expressed in the generated source
    #[error("{0}")]
    Render(SourceDiagnostic),

    /// The output file could not be written
    #[error("could not write `{}`: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Check mode found a missing or different output file
    #[error("`{}` is out of date", .path.display())]
    OutputStale { path: PathBuf },

    /// A command-line option has an unusable value
    #[error("invalid value for `{option}`: {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },
}

impl GenError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => error_codes::input::NOT_FOUND,
            Self::Parse(d) | Self::Validation(d) | Self::Render(d) => d.code,
            Self::OutputWrite { .. } => error_codes::output::WRITE_FAILED,
            Self::OutputStale { .. } => error_codes::output::STALE,
            Self::InvalidOption { .. } => error_codes::options::INVALID_OPTION,
        }
    }

    /// Taxonomy name, as used in JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "input_not_found",
            Self::Parse(_) => "parse",
            Self::Validation(_) => "validation",
            Self::Render(_) => "render",
            Self::OutputWrite { .. } => "output_write",
            Self::OutputStale { .. } => "output_stale",
            Self::InvalidOption { .. } => "invalid_option",
        }
    }

    /// The source diagnostic, for errors that point into the input
    pub fn source_diagnostic(&self) -> Option<&SourceDiagnostic> {
        match self {
            Self::Parse(d) | Self::Validation(d) | Self::Render(d) => Some(d),
            _ => None,
        }
    }

    fn help_text(&self) -> Option<&str> {
        match self {
            Self::Parse(d) | Self::Validation(d) | Self::Render(d) => d.help.as_deref(),
            Self::OutputStale { .. } => Some("run errgen without `--check` to regenerate it"),
            _ => None,
        }
    }

    /// Serializable summary of this error
    pub fn to_report(&self) -> Report {
        let diagnostic = self.source_diagnostic();
        let primary = diagnostic.and_then(SourceDiagnostic::primary);
        let file = match self {
            Self::InputNotFound { path, .. }
            | Self::OutputWrite { path, .. }
            | Self::OutputStale { path } => Some(path.display().to_string()),
            _ => diagnostic.map(|d| d.file.display().to_string()),
        };

        Report {
            code: self.code(),
            kind: self.kind(),
            message: self.to_string(),
            file,
            line: primary.map(|l| l.line),
            column: primary.map(|l| l.column),
            labels: diagnostic.map(|d| d.labels.clone()).unwrap_or_default(),
            help: self.help_text().map(str::to_string),
        }
    }
}

impl Diagnostic for GenError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(GenError::code(self)) as Box<dyn fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.source_diagnostic()
            .map(|d| &d.source as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let diagnostic = self.source_diagnostic()?;
        if diagnostic.labels.is_empty() {
            return None;
        }
        let labels = diagnostic.labels.iter().map(|label| {
            LabeledSpan::new_with_span(Some(label.text.clone()), label.span.clone())
        });
        Some(Box::new(labels) as Box<dyn Iterator<Item = LabeledSpan> + '_>)
    }
}

/// Machine-readable form of a [`GenError`]
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub code: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Report {
    /// Format as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests;
