//! Rendering of records into the generated enum
//!
//! Each record becomes one variant:
//!
//! ```text
//!     #[error("<message>")]
//!     <PascalCaseName> = <final_code>,
//! ```
//!
//! Messages are emitted verbatim, never escaped. Anything that would not
//! survive as a `thiserror` format string literal is rejected instead.

use std::collections::HashMap;

use serde::Serialize;

use crate::diagnostics::error_codes::{render, validation};
use crate::diagnostics::{GenError, Result};
use crate::document::Document;
use crate::naming::{check_identifier, pascal_case};
use crate::record::Record;

/// Enum name used when none is configured
pub const DEFAULT_ENUM_NAME: &str = "ApiError";

/// Integer representation for `#[repr(...)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Isize,
    Usize,
}

impl Repr {
    pub fn as_str(self) -> &'static str {
        match self {
            Repr::I8 => "i8",
            Repr::I16 => "i16",
            Repr::I32 => "i32",
            Repr::I64 => "i64",
            Repr::U8 => "u8",
            Repr::U16 => "u16",
            Repr::U32 => "u32",
            Repr::U64 => "u64",
            Repr::Isize => "isize",
            Repr::Usize => "usize",
        }
    }

    /// Whether `value` is representable in this type
    pub fn fits(self, value: i64) -> bool {
        match self {
            Repr::I8 => i8::try_from(value).is_ok(),
            Repr::I16 => i16::try_from(value).is_ok(),
            Repr::I32 => i32::try_from(value).is_ok(),
            Repr::I64 => true,
            Repr::U8 => u8::try_from(value).is_ok(),
            Repr::U16 => u16::try_from(value).is_ok(),
            Repr::U32 => u32::try_from(value).is_ok(),
            Repr::U64 => value >= 0,
            Repr::Isize => isize::try_from(value).is_ok(),
            Repr::Usize => usize::try_from(value).is_ok(),
        }
    }
}

/// Options for the generated enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name of the generated enum
    pub enum_name: String,
    /// Optional `#[repr(...)]`
    pub repr: Option<Repr>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            repr: None,
        }
    }
}

/// One variant ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub ident: String,
    pub value: i64,
    pub message: String,
}

impl RenderedEntry {
    /// The attribute and declaration lines, followed by a blank line
    pub fn render(&self) -> String {
        format!(
            "    #[error(\"{}\")]\n    {} = {},\n\n",
            self.message, self.ident, self.value
        )
    }
}

/// Characters a message may not contain, since it lands unescaped inside a
/// format string literal
fn unsupported_char(message: &str) -> Option<char> {
    message
        .chars()
        .find(|&c| matches!(c, '"' | '\\' | '{' | '}') || c.is_control())
}

/// Compute and check the variant for every record, in record order
pub fn entries(
    document: &Document,
    records: &[Record],
    options: &RenderOptions,
) -> Result<Vec<RenderedEntry>> {
    let source = document.source();
    let mut by_ident: HashMap<String, &Record> = HashMap::new();
    let mut by_value: HashMap<i64, &Record> = HashMap::new();
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let ident = pascal_case(&record.name);
        if let Err(problem) = check_identifier(&ident) {
            return Err(source
                .diagnostic(
                    render::INVALID_IDENTIFIER,
                    format!(
                        "record `{}` does not give a valid variant name: `{}` is not usable because {}",
                        record.name, ident, problem
                    ),
                )
                .label(record.span.clone(), format!("becomes `{}`", ident))
                .help("rename the record so its PascalCase form starts with a letter")
                .render_error());
        }
        if let Some(first) = by_ident.get(&ident) {
            return Err(source
                .diagnostic(
                    render::DUPLICATE_IDENTIFIER,
                    format!(
                        "records `{}` and `{}` both become variant `{}`",
                        first.name, record.name, ident
                    ),
                )
                .label(record.span.clone(), format!("becomes `{}`", ident))
                .label(first.span.clone(), "already used here")
                .render_error());
        }

        let Some(value) = record.final_code() else {
            return Err(source
                .diagnostic(
                    validation::CODE_OVERFLOW,
                    format!(
                        "`code * status` of record `{}` overflows a 64-bit integer",
                        record.name
                    ),
                )
                .label(record.span.clone(), "this record")
                .validation_error());
        };
        if let Some(repr) = options.repr {
            if !repr.fits(value) {
                return Err(source
                    .diagnostic(
                        render::REPR_OVERFLOW,
                        format!(
                            "discriminant {} of record `{}` does not fit in `{}`",
                            value,
                            record.name,
                            repr.as_str()
                        ),
                    )
                    .label(record.span.clone(), format!("= {}", value))
                    .render_error());
            }
        }
        // rustc rejects repeated discriminants (E0081)
        if let Some(first) = by_value.get(&value) {
            return Err(source
                .diagnostic(
                    render::DUPLICATE_DISCRIMINANT,
                    format!(
                        "records `{}` and `{}` both have code {}",
                        first.name, record.name, value
                    ),
                )
                .label(record.span.clone(), format!("= {}", value))
                .label(first.span.clone(), "first used here")
                .help("enum discriminants must be unique")
                .render_error());
        }

        if let Some(c) = unsupported_char(&record.message) {
            return Err(source
                .diagnostic(
                    render::UNSUPPORTED_MESSAGE,
                    format!(
                        "message of record `{}` contains `{}`, which cannot appear unescaped in the generated source",
                        record.name,
                        c.escape_debug()
                    ),
                )
                .label(record.message_span.clone(), "this message")
                .help("remove quotes, backslashes, braces and control characters from the message")
                .render_error());
        }

        by_ident.insert(ident.clone(), record);
        by_value.insert(value, record);
        tracing::debug!(name = %record.name, %ident, value, "variant");
        entries.push(RenderedEntry {
            ident,
            value,
            message: record.message.clone(),
        });
    }

    Ok(entries)
}

/// Put rendered entries into the enum wrapper
pub fn wrap(input_name: &str, entries: &[RenderedEntry], options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "// @generated by errgen from `{}`. Do not edit by hand.\n\n",
        input_name
    ));
    output.push_str("use enumn::N;\n");
    output.push_str("use thiserror::Error;\n\n");
    output.push_str("/// Error codes with a numeric discriminant.\n");
    output.push_str("///\n");
    output.push_str(
        "/// Each discriminant is the record's code, multiplied by its status when one is set.\n",
    );
    output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, N)]\n");
    if let Some(repr) = options.repr {
        output.push_str(&format!("#[repr({})]\n", repr.as_str()));
    }
    output.push_str(&format!("pub enum {} {{\n", options.enum_name));
    for entry in entries {
        output.push_str(&entry.render());
    }
    output.push_str("}\n");

    output
}

/// Render the full output file for a validated document
pub fn render(document: &Document, records: &[Record], options: &RenderOptions) -> Result<String> {
    if let Err(problem) = check_identifier(&options.enum_name) {
        return Err(GenError::InvalidOption {
            option: "--enum-name",
            message: format!("`{}` is not a valid type name because {}", options.enum_name, problem),
        });
    }

    let entries = entries(document, records, options)?;
    Ok(wrap(&document.source().file_name(), &entries, options))
}
