//! YAML front end: one top-level key per record
//!
//! ```yaml
//! not_found:
//!   code: 1002
//!   status: 404
//!   message: The requested resource or endpoint could not be found
//! over_rate_limit: {code: 1003, status: 429, message: API rate limit exceeded}
//! ```
//!
//! `serde_yaml` does the parsing. Its values carry no spans, so keys and
//! scalar values are located again in the source text for diagnostics.

use std::ops::Range;

use serde_yaml::Value;

use super::{Entry, Mapping, Node, SourceFile};
use crate::diagnostics::error_codes::syntax;
use crate::diagnostics::{GenError, Result};

/// Parse a YAML document into its top-level mapping, keeping key order
pub fn parse(source: &SourceFile) -> Result<Mapping> {
    if is_blank(source.content()) {
        return Ok(Mapping::new());
    }

    let value: Value =
        serde_yaml::from_str(source.content()).map_err(|e| invalid_yaml(source, &e))?;

    match value {
        // An empty or comment-only document
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(root) => convert_mapping(source, root, 0..source.content().len(), true),
        other => {
            let span = first_line(source.content());
            let mut diagnostic = source
                .diagnostic(
                    syntax::NOT_A_MAPPING,
                    format!(
                        "the document must be a mapping of record names, found {}",
                        type_name(&other)
                    ),
                )
                .label(span, "this document");
            if matches!(other, Value::Sequence(_)) {
                diagnostic = diagnostic
                    .help("write each record as a top-level `name:` key, not as a `- ` list item");
            }
            Err(diagnostic.parse_error())
        }
    }
}

/// Only whitespace and comments
fn is_blank(content: &str) -> bool {
    content.trim_start_matches('\u{feff}').lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn invalid_yaml(source: &SourceFile, e: &serde_yaml::Error) -> GenError {
    let message = e.to_string();
    // The location is carried by the label
    let message = match message.split_once(" at line ") {
        Some((head, _)) => head.to_string(),
        None => message,
    };

    let content = source.content();
    let mut at = e
        .location()
        .map_or(0, |location| location.index().min(content.len()));
    while !content.is_char_boundary(at) {
        at -= 1;
    }

    source
        .diagnostic(syntax::INVALID_YAML, message)
        .label(at..at, "here")
        .help("quote messages that contain `: ` or start with a special character")
        .parse_error()
}

/// Convert a mapping whose entries all lie inside `region`
fn convert_mapping(
    source: &SourceFile,
    mapping: serde_yaml::Mapping,
    region: Range<usize>,
    top_level: bool,
) -> Result<Mapping> {
    let content = source.content();
    let mut located = Vec::with_capacity(mapping.len());
    let mut cursor = region.start;

    for (key, value) in mapping {
        let key = match key {
            Value::String(key) => key,
            other => {
                let span = scalar_text(&other)
                    .and_then(|text| find_key(content, cursor..region.end, &text, top_level))
                    .unwrap_or(cursor..cursor);
                return Err(source
                    .diagnostic(
                        syntax::NON_STRING_KEY,
                        format!("keys must be strings, found {}", type_name(&other)),
                    )
                    .label(span, "this key")
                    .help("quote the key to use it as a name")
                    .parse_error());
            }
        };
        let key_span =
            find_key(content, cursor..region.end, &key, top_level).unwrap_or(cursor..cursor);
        cursor = key_span.end;
        located.push((key, key_span, value));
    }

    // Each value lies between its key and the next key
    let ends: Vec<usize> = located
        .iter()
        .skip(1)
        .map(|(_, span, _)| span.start)
        .chain(std::iter::once(region.end))
        .collect();

    let mut result = Mapping::new();
    for ((key, key_span, value), end) in located.into_iter().zip(ends) {
        let value_span = value_span(content, &key_span).unwrap_or_else(|| key_span.clone());
        let value = convert(source, value, &value_span, key_span.end..end)?;
        let entry = Entry {
            key,
            key_span,
            value,
            value_span,
        };
        // serde_yaml already rejects duplicate keys
        if let Err((entry, first)) = result.insert(entry) {
            return Err(super::duplicate_key(source, &entry, first));
        }
    }
    Ok(result)
}

fn convert(
    source: &SourceFile,
    value: Value,
    span: &Range<usize>,
    region: Range<usize>,
) -> Result<Node> {
    let node = match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Integer(i)
            } else if n.is_f64() {
                Node::Float(n.as_f64().unwrap_or_default())
            } else {
                return Err(source
                    .diagnostic(
                        syntax::INTEGER_OUT_OF_RANGE,
                        format!("integer {} does not fit in a signed 64-bit integer", n),
                    )
                    .label(span.clone(), "out of range")
                    .parse_error());
            }
        }
        Value::String(s) => Node::String(s),
        Value::Sequence(_) => Node::Other("sequence"),
        Value::Mapping(mapping) => Node::Mapping(convert_mapping(source, mapping, region, false)?),
        Value::Tagged(_) => Node::Other("tagged value"),
    };
    Ok(node)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_line(content: &str) -> Range<usize> {
    let start = content.len() - content.trim_start().len();
    let end = content[start..].find('\n').map_or(content.len(), |n| start + n);
    start..content[..end].trim_end().len().max(start)
}

/// Find `key`, plain or quoted and followed by `:`, inside `within`.
///
/// Top-level keys prefer a match at the start of a line, so a record named
/// like a field of an earlier record still points at the record.
fn find_key(content: &str, within: Range<usize>, key: &str, top_level: bool) -> Option<Range<usize>> {
    if top_level {
        if let Some(span) = find_key_where(content, within.clone(), key, |before| {
            matches!(before, None | Some('\n'))
        }) {
            return Some(span);
        }
    }
    find_key_where(content, within, key, |before| {
        matches!(before, None | Some(' ' | '\t' | '\n' | '\r' | '{' | ','))
    })
}

fn find_key_where(
    content: &str,
    within: Range<usize>,
    key: &str,
    boundary: impl Fn(Option<char>) -> bool,
) -> Option<Range<usize>> {
    let haystack = content.get(within.clone())?;
    let mut best: Option<Range<usize>> = None;

    for candidate in [key.to_string(), format!("\"{}\"", key), format!("'{}'", key)] {
        if candidate.is_empty() {
            continue;
        }
        let found = haystack.match_indices(candidate.as_str()).find_map(|(at, _)| {
            let start = within.start + at;
            let end = start + candidate.len();
            let before = content[..start].chars().next_back();
            let after = content[end..].trim_start_matches([' ', '\t']);
            (boundary(before) && after.starts_with(':')).then_some(start..end)
        });
        if let Some(span) = found {
            if best.as_ref().map_or(true, |b| span.start < b.start) {
                best = Some(span);
            }
        }
    }
    best
}

/// Span of the value written on the same line as its key, if any
fn value_span(content: &str, key_span: &Range<usize>) -> Option<Range<usize>> {
    let colon = key_span.end + content[key_span.end..].find(':')?;
    let after = &content[colon + 1..];
    let start = colon + 1 + (after.len() - after.trim_start_matches([' ', '\t']).len());
    let text = &content[start..];

    let len = match text.chars().next() {
        None | Some('\n' | '\r' | '#') => return None,
        Some(quote @ ('"' | '\'')) => quoted_len(text, quote),
        Some(open @ ('{' | '[')) => bracketed_len(text, open),
        Some(_) => plain_len(text, in_flow(content, key_span.start)),
    };
    (len > 0).then_some(start..start + len)
}

fn in_flow(content: &str, key_start: usize) -> bool {
    content[..key_start]
        .trim_end_matches([' ', '\t', '\n', '\r'])
        .ends_with(['{', ','])
}

fn line_len(text: &str) -> usize {
    text.find('\n').unwrap_or(text.len())
}

fn quoted_len(text: &str, quote: char) -> usize {
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
        } else if c == quote {
            if quote == '\'' && chars.peek().is_some_and(|&(_, next)| next == '\'') {
                chars.next();
            } else {
                return i + 1;
            }
        }
    }
    line_len(text)
}

fn bracketed_len(text: &str, open: char) -> usize {
    let close = if open == '{' { '}' } else { ']' };
    let mut depth = 0usize;
    let mut quote = None;
    for (i, c) in text.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == open => depth += 1,
            None if c == close => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            None => {}
        }
    }
    line_len(text)
}

fn plain_len(text: &str, flow: bool) -> usize {
    let mut end = line_len(text);
    if let Some(comment) = text[..end].find(" #") {
        end = comment;
    }
    if flow {
        if let Some(delimiter) = text[..end].find([',', '}', ']']) {
            end = delimiter;
        }
    }
    text[..end].trim_end().len()
}

#[cfg(test)]
#[path = "yaml_input_tests.rs"]
mod tests;
