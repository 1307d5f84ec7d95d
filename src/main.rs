//! errgen CLI - generate a Rust error enum from error definitions

use clap::Parser;
use std::process::ExitCode;

use errgen::cli::Cli;

fn main() -> ExitCode {
    errgen::cli::run(Cli::parse())
}
