//! Rewrites TypeScript declaration files so that older compilers can
//! consume them.
//!
//! The pipeline is split across the workspace crates:
//! - `dts-scanner`: tokens and trivia
//! - `dts-parser`: declaration-file parser and node arena
//! - `dts-emitter`: the downlevel rewrites and the printer
//!
//! This crate holds the command line driver and re-exports the pieces a
//! library user needs to run the pipeline on in-memory text.

pub mod cli;
pub mod tracing_config;

pub use dts_common::{Diagnostic, NewLineKind};
pub use dts_emitter::{
    PrinterOptions, TransformError, print_parsed_file, transform_all, transform_file,
};
pub use dts_parser::{ParsedFile, parse_file};

/// Failure of [`downlevel_text`].
#[derive(Debug, thiserror::Error)]
pub enum DownlevelTextError {
    /// The source did not parse cleanly.
    #[error("{} syntax error(s)", .0.len())]
    Diagnostics(Vec<Diagnostic>),
    /// The tree could not be rewritten.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Parse, rewrite and print one declaration file held in memory.
pub fn downlevel_text(
    file_name: &str,
    source: &str,
    options: PrinterOptions,
) -> Result<String, DownlevelTextError> {
    let parsed = parse_file(file_name, source);
    if !parsed.diagnostics.is_empty() {
        return Err(DownlevelTextError::Diagnostics(parsed.diagnostics));
    }
    let rewritten = transform_file(parsed)?;
    Ok(print_parsed_file(&rewritten, options))
}
