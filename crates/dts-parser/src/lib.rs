//! Declaration-file parser and syntax tree arena.
//!
//! `parser` holds the node arena, the node kinds and the parser state.
//! `syntax` holds small read-only helpers shared with the rewriter.

pub mod parser;
pub mod syntax;

pub use parser::{NodeArena, NodeIndex, NodeList, ParsedFile, ParserState, parse_file};
