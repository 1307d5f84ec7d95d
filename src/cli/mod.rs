//! Command-line interface for errgen
//!
//! `errgen <INPUT> <OUTPUT>` generates the enum; `--check` verifies an
//! existing output instead, and `--explain CODE` documents an error code.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::diagnostics::{explain, GenError};
use crate::generator::{generate, GenerateOptions, Outcome};
use crate::output::OutputStatus;
use crate::render::{RenderOptions, Repr, DEFAULT_ENUM_NAME};

/// errgen - generate a strongly typed Rust error enum from error definitions
#[derive(Parser, Debug)]
#[command(name = "errgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Error definitions: a YAML-style mapping document, or a `.toml` file
    #[arg(value_name = "INPUT", required_unless_present = "explain")]
    pub input: Option<PathBuf>,

    /// Rust source file to generate (overwritten)
    #[arg(value_name = "OUTPUT", required_unless_present = "explain")]
    pub output: Option<PathBuf>,

    /// Name of the generated enum
    #[arg(long, default_value = DEFAULT_ENUM_NAME)]
    pub enum_name: String,

    /// Add `#[repr(TYPE)]` and check every discriminant fits
    #[arg(long, value_enum, value_name = "TYPE")]
    pub repr: Option<Repr>,

    /// Check that OUTPUT is up to date without modifying it
    #[arg(long)]
    pub check: bool,

    /// Print the outcome or the error as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Explain an error code (e.g., E0202) and exit
    #[arg(long, value_name = "CODE")]
    pub explain: Option<String>,
}

impl Cli {
    /// Generator options, present unless only `--explain` was given
    pub fn generate_options(&self) -> Option<GenerateOptions> {
        let input = self.input.clone()?;
        let output = self.output.clone()?;
        Some(GenerateOptions {
            input,
            output,
            render: RenderOptions {
                enum_name: self.enum_name.clone(),
                repr: self.repr,
            },
            check: self.check,
        })
    }
}

/// Run the CLI and map the result to an exit code
pub fn run(cli: Cli) -> ExitCode {
    crate::logging::init(cli.verbose, cli.quiet);

    if let Some(code) = &cli.explain {
        return run_explain(code);
    }

    let Some(options) = cli.generate_options() else {
        eprintln!("Error: both INPUT and OUTPUT are required");
        return ExitCode::FAILURE;
    };

    match generate(&options) {
        Ok(outcome) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string())
                );
            } else if !cli.quiet {
                println!("{}", summary(&outcome));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(e, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run_explain(code: &str) -> ExitCode {
    let code = code.trim().to_ascii_uppercase();
    match explain(&code) {
        Some(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: unknown error code `{}`", code);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: GenError, json: bool) {
    if json {
        println!("{}", e.to_report().to_json());
    } else {
        eprintln!("{:?}", miette::Report::new(e));
    }
}

/// One-line human summary of a successful run
pub fn summary(outcome: &Outcome) -> String {
    let output = outcome.output.display();
    match outcome.status {
        OutputStatus::Written => format!(
            "Generated {} with {} variant(s) in {}",
            outcome.enum_name, outcome.variants, output
        ),
        OutputStatus::Unchanged => format!(
            "{} is unchanged ({} variant(s))",
            output, outcome.variants
        ),
        OutputStatus::UpToDate => format!(
            "{} is up to date ({} variant(s))",
            output, outcome.variants
        ),
    }
}

#[cfg(test)]
mod tests;
