//! Error definition records
//!
//! Turns the top-level entries of a [`Document`] into [`Record`]s, checking
//! that every record has the fields it needs with the types it needs. Values
//! are never coerced.

use std::ops::Range;

use crate::diagnostics::error_codes::validation;
use crate::diagnostics::Result;
use crate::document::{Document, Entry, Mapping, Node, SourceFile};

pub const CODE: &str = "code";
pub const STATUS: &str = "status";
pub const MESSAGE: &str = "message";

/// One named error definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record name, as written in the document
    pub name: String,
    /// Base numeric code
    pub code: i64,
    /// Optional scale factor (usually an HTTP status)
    pub status: Option<i64>,
    /// Display message
    pub message: String,
    /// Span of the record name
    pub span: Range<usize>,
    /// Span of the message value
    pub message_span: Range<usize>,
}

impl Record {
    /// The discriminant of the generated variant, `None` on overflow
    pub fn final_code(&self) -> Option<i64> {
        final_code(self.code, self.status)
    }
}

/// `code` when `status` is unset, `code * status` otherwise.
///
/// Returns `None` when the product overflows `i64`.
pub fn final_code(code: i64, status: Option<i64>) -> Option<i64> {
    match status {
        None => Some(code),
        Some(status) => code.checked_mul(status),
    }
}

/// Validate every top-level entry of a document as a record, in document order
pub fn from_document(document: &Document) -> Result<Vec<Record>> {
    let source = document.source();
    let root = document.root();

    if root.is_empty() {
        return Err(source
            .diagnostic(validation::EMPTY_DOCUMENT, "the document defines no records")
            .label(0..0, "empty document")
            .help("add at least one record with a `code` and a `message`")
            .validation_error());
    }

    let records = root
        .entries()
        .iter()
        .map(|entry| record_from_entry(source, entry))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = records.len(), "validated records");
    Ok(records)
}

fn record_from_entry(source: &SourceFile, entry: &Entry) -> Result<Record> {
    let Node::Mapping(fields) = &entry.value else {
        return Err(source
            .diagnostic(
                validation::NOT_A_MAPPING,
                format!(
                    "record `{}` must be a mapping, found {}",
                    entry.key,
                    entry.value.type_name()
                ),
            )
            .label(entry.key_span.clone(), "this record")
            .help("give the record `code` and `message` fields")
            .validation_error());
    };

    if let Some(unknown) = fields
        .entries()
        .iter()
        .find(|field| ![CODE, STATUS, MESSAGE].contains(&field.key.as_str()))
    {
        return Err(source
            .diagnostic(
                validation::UNKNOWN_FIELD,
                format!("unknown field `{}` in record `{}`", unknown.key, entry.key),
            )
            .label(unknown.key_span.clone(), "unknown field")
            .help("records accept `code`, `status` and `message`")
            .validation_error());
    }

    let code_field = required(source, entry, fields, CODE)?;
    let Node::Integer(code) = code_field.value else {
        return Err(wrong_type(source, entry, code_field, "an integer"));
    };

    let status = match fields.get(STATUS) {
        None => None,
        Some(field) => match field.value {
            Node::Null => None,
            Node::Integer(status) => Some(status),
            _ => return Err(wrong_type(source, entry, field, "an integer")),
        },
    };

    let message_field = required(source, entry, fields, MESSAGE)?;
    let Node::String(message) = &message_field.value else {
        return Err(wrong_type(source, entry, message_field, "a string"));
    };

    tracing::debug!(name = %entry.key, code, ?status, "record");

    Ok(Record {
        name: entry.key.clone(),
        code,
        status,
        message: message.clone(),
        span: entry.key_span.clone(),
        message_span: message_field.value_span.clone(),
    })
}

fn required<'m>(
    source: &SourceFile,
    entry: &Entry,
    fields: &'m Mapping,
    name: &str,
) -> Result<&'m Entry> {
    fields.get(name).ok_or_else(|| {
        source
            .diagnostic(
                validation::MISSING_FIELD,
                format!("record `{}` is missing the `{}` field", entry.key, name),
            )
            .label(entry.key_span.clone(), format!("no `{}` here", name))
            .validation_error()
    })
}

fn wrong_type(
    source: &SourceFile,
    entry: &Entry,
    field: &Entry,
    expected: &str,
) -> crate::diagnostics::GenError {
    source
        .diagnostic(
            validation::WRONG_TYPE,
            format!(
                "`{}` of record `{}` must be {}, found {}",
                field.key,
                entry.key,
                expected,
                field.value.type_name()
            ),
        )
        .label(field.value_span.clone(), format!("expected {}", expected))
        .validation_error()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
