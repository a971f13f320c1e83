//! Rewrites and printing for declaration files.
//!
//! - `transforms` lowers accessors and namespace re-exports in a parsed tree.
//! - `emitter` prints a tree back to source text.

pub mod emitter;
pub mod source_writer;
pub mod transforms;

pub use emitter::{Printer, PrinterOptions, print_parsed_file};
pub use transforms::{TransformError, transform_all, transform_file};
