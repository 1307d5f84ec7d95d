//! Source file and span utilities

use miette::NamedSource;
use std::path::{Path, PathBuf};

use crate::diagnostics::DiagnosticBuilder;

/// An input document with its content and line information
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name without directories, used in generated headers
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Convert a byte offset to line and column (1-indexed)
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let col = offset.saturating_sub(line_start) + 1;
        (line + 1, col)
    }

    /// Get a line by number (1-indexed), without its line terminator
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 || line > self.line_starts.len() {
            return None;
        }

        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches('\r'))
    }

    /// Source text wrapped for miette rendering
    pub fn named(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.content.clone())
    }

    /// Start a diagnostic pointing into this file
    pub fn diagnostic(&self, code: &'static str, message: impl Into<String>) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder::new(self, code, message.into())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
