//! Scanner for TypeScript declaration files.
//!
//! Produces a flat token stream with trivia skipped. The parser pulls tokens
//! one at a time and relies on the scanner for token positions, preceding
//! line breaks (for ASI) and a record of every identifier in the file.

pub mod char_codes;
pub mod scanner_impl;
pub mod syntax_kind;

pub use scanner_impl::{ScanError, ScannerSnapshot, ScannerState, token_flags};
pub use syntax_kind::{SyntaxKind, text_to_keyword};

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
