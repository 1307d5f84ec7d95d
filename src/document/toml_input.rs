//! TOML front end: one top-level table per record
//!
//! ```toml
//! [not_found]
//! code = 1002
//! status = 404
//! message = "The requested resource or endpoint could not be found"
//! ```

use std::ops::Range;

use super::{Entry, Mapping, Node, SourceFile};
use crate::diagnostics::error_codes::syntax;
use crate::diagnostics::Result;

/// Parse a TOML document into its top-level mapping, keeping key order
pub fn parse(source: &SourceFile) -> Result<Mapping> {
    let table: toml::Table = source.content().parse().map_err(|e: toml::de::Error| {
        let span = e.span().unwrap_or(0..0);
        source
            .diagnostic(syntax::INVALID_TOML, e.message().trim_end().to_string())
            .label(span, "here")
            .parse_error()
    })?;

    let mut mapping = Mapping::new();
    for (key, value) in table {
        let span = locate_key(source.content(), &key).unwrap_or(0..0);
        let entry = Entry {
            value: convert(source, value, &span)?,
            key,
            key_span: span.clone(),
            value_span: span,
        };
        if let Err((entry, first)) = mapping.insert(entry) {
            return Err(super::duplicate_key(source, &entry, first));
        }
    }
    Ok(mapping)
}

/// TOML values carry no spans, so nested values share their record's span.
///
/// The `toml` parser rejects duplicate keys, so the duplicate check never
/// fires for parsed input.
fn convert(source: &SourceFile, value: toml::Value, span: &Range<usize>) -> Result<Node> {
    let node = match value {
        toml::Value::String(s) => Node::String(s),
        toml::Value::Integer(i) => Node::Integer(i),
        toml::Value::Float(f) => Node::Float(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(_) => Node::Other("datetime"),
        toml::Value::Array(_) => Node::Other("array"),
        toml::Value::Table(table) => {
            let mut mapping = Mapping::new();
            for (key, value) in table {
                let entry = Entry {
                    value: convert(source, value, span)?,
                    key,
                    key_span: span.clone(),
                    value_span: span.clone(),
                };
                if let Err((entry, first)) = mapping.insert(entry) {
                    return Err(super::duplicate_key(source, &entry, first));
                }
            }
            Node::Mapping(mapping)
        }
    };
    Ok(node)
}

/// Find where a top-level key is introduced: a `[key]` header, a dotted
/// `key.field = ...` line or a `key = ...` line
fn locate_key(content: &str, key: &str) -> Option<Range<usize>> {
    let quoted = format!("\"{}\"", key);
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let trimmed = line.trim_start();

        if let Some(header) = trimmed.strip_prefix('[') {
            let inner_indent = header.len() - header.trim_start().len();
            let inner = header.trim_start();
            for candidate in [key, quoted.as_str()] {
                if let Some(rest) = inner.strip_prefix(candidate) {
                    if rest.trim_start().starts_with(']') {
                        let start = offset + indent + 1 + inner_indent;
                        return Some(start..start + candidate.len());
                    }
                }
            }
        } else {
            for candidate in [key, quoted.as_str()] {
                if let Some(rest) = trimmed.strip_prefix(candidate) {
                    let rest = rest.trim_start();
                    if rest.starts_with('=') || rest.starts_with('.') {
                        let start = offset + indent;
                        return Some(start..start + candidate.len());
                    }
                }
            }
        }

        offset += line.len();
    }
    None
}
