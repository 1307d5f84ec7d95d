//! The generator pipeline: load, validate, render, write

use serde::Serialize;
use std::path::PathBuf;

use crate::diagnostics::Result;
use crate::output::{self, OutputStatus};
use crate::render::RenderOptions;
use crate::{document, record, render};

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input document
    pub input: PathBuf,
    /// Generated source file
    pub output: PathBuf,
    /// Enum name and repr
    pub render: RenderOptions,
    /// Compare with the existing output instead of writing
    pub check: bool,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            render: RenderOptions::default(),
            check: false,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub enum_name: String,
    pub variants: usize,
    pub status: OutputStatus,
}

/// Run the whole pipeline. The output file is only touched once rendering
/// has succeeded.
pub fn generate(options: &GenerateOptions) -> Result<Outcome> {
    let document = document::load(&options.input)?;
    let records = record::from_document(&document)?;
    let contents = render::render(&document, &records, &options.render)?;

    let status = if options.check {
        output::check(&options.output, &contents)?
    } else {
        output::write(&options.output, &contents)?
    };

    tracing::info!(
        input = %options.input.display(),
        output = %options.output.display(),
        variants = records.len(),
        ?status,
        "generated {}",
        options.render.enum_name
    );

    Ok(Outcome {
        input: options.input.clone(),
        output: options.output.clone(),
        enum_name: options.render.enum_name.clone(),
        variants: records.len(),
        status,
    })
}
