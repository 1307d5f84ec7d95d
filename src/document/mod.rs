//! Input documents for errgen
//!
//! This module provides:
//! - Source file tracking for diagnostics
//! - A YAML front end for `errors.yaml`
//! - A TOML front end for `.toml` documents
//! - The ordered, spanned node tree both produce

pub mod source;
pub mod toml_input;
pub mod yaml_input;

pub use source::SourceFile;

use std::ops::Range;
use std::path::Path;

use crate::diagnostics::{error_codes, GenError, Result};

/// Syntax of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML mappings, block or flow style
    Yaml,
    /// TOML tables
    Toml,
}

impl Format {
    /// Pick the format from a file extension; anything but `.toml` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// A parsed value
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Mapping),
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// A value kind errgen never accepts, such as an array
    Other(&'static str),
}

impl Node {
    /// Type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::String(_) => "string",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Bool(_) => "boolean",
            Node::Null => "null",
            Node::Other(name) => name,
        }
    }
}

/// One `key: value` pair with the spans of both sides
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub key_span: Range<usize>,
    pub value: Node,
    pub value_span: Range<usize>,
}

/// An insertion-ordered mapping with unique keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<Entry>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. On a duplicate key the entry is handed back together
    /// with the span of the first occurrence.
    pub fn insert(&mut self, entry: Entry) -> std::result::Result<(), (Entry, Range<usize>)> {
        if let Some(existing) = self.get(&entry.key) {
            let first = existing.key_span.clone();
            return Err((entry, first));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Entries in document order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Span from the first key to the end of the last value
    pub fn span(&self) -> Option<Range<usize>> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some(first.key_span.start..last.value_span.end)
    }
}

/// A parsed input document
#[derive(Debug, Clone)]
pub struct Document {
    source: SourceFile,
    root: Mapping,
}

impl Document {
    /// The source the document was parsed from
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Top-level entries, one per record
    pub fn root(&self) -> &Mapping {
        &self.root
    }
}

/// Read and parse a document, choosing the syntax from the file extension
pub fn load(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|source| GenError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    parse_source(path, content, Format::from_path(path))
}

/// Parse document text
pub fn parse_source(path: &Path, content: impl Into<String>, format: Format) -> Result<Document> {
    let source = SourceFile::new(path, content);
    let root = match format {
        Format::Yaml => yaml_input::parse(&source)?,
        Format::Toml => toml_input::parse(&source)?,
    };
    tracing::debug!(
        file = %source.path().display(),
        ?format,
        entries = root.len(),
        "parsed document"
    );
    Ok(Document { source, root })
}

/// Build the error for a key that already exists in its mapping
pub(crate) fn duplicate_key(source: &SourceFile, entry: &Entry, first: Range<usize>) -> GenError {
    source
        .diagnostic(
            error_codes::syntax::DUPLICATE_KEY,
            format!("duplicate key `{}`", entry.key),
        )
        .label(entry.key_span.clone(), "defined again here")
        .label(first, "first defined here")
        .help("record names and record fields must be unique")
        .parse_error()
}
