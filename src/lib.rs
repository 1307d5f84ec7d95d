//! errgen
//!
//! Reads error definitions (a name, a `code`, an optional `status` and a
//! `message` per record) and generates a Rust enum whose variants carry
//! `code` or `code * status` as discriminant and the message as their
//! `Display` text.

pub mod cli;
pub mod diagnostics;
pub mod document;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod output;
pub mod record;
pub mod render;

pub use diagnostics::{GenError, Result};
pub use generator::{generate, GenerateOptions, Outcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::diagnostics::{GenError, Report, Result};
    pub use crate::document::{Document, Format, Node, SourceFile};
    pub use crate::generator::{generate, GenerateOptions, Outcome};
    pub use crate::record::Record;
    pub use crate::render::{RenderOptions, Repr};
}
