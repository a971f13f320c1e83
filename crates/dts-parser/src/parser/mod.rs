//! Declaration-file parser.
//!
//! Nodes live in a `NodeArena` and refer to each other by `NodeIndex`.
//! Parent links are kept in a side table so nodes can be shared between an
//! input tree and a rewritten tree without copying.

pub mod base;
pub mod flags;
pub mod node;
mod node_access;
mod node_arena;
pub mod state;
mod state_class_members;
mod state_imports_exports;
mod state_statements;
pub mod syntax_kind_ext;

pub use base::{NO_POS, NodeIndex, NodeList};
pub use flags::ModifierFlags;
pub use node::{Node, NodeArena, NodeData};
pub use state::ParserState;

use dts_common::Diagnostic;
use std::sync::Arc;

/// A parsed declaration file: its arena, root `SOURCE_FILE` node and any
/// diagnostics produced while building it.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub file_name: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    #[must_use]
    pub fn source_text(&self) -> Option<&Arc<str>> {
        self.arena.get_source_file_at(self.root).map(|sf| &sf.text)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parse one declaration file.
#[must_use]
pub fn parse_file(file_name: impl Into<String>, source_text: impl Into<String>) -> ParsedFile {
    let mut parser = ParserState::new(file_name.into(), source_text.into());
    let root = parser.parse_source_file();
    parser.into_parsed_file(root)
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;
