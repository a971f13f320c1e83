//! Centralized limits for recursive algorithms.
//!
//! Declaration files are shallow in practice, but namespaces can nest
//! arbitrarily and the tree walks are recursive, so every recursive walk
//! stops at a fixed depth instead of overflowing the stack.

/// Maximum depth of nested namespace / module / class bodies the parser
/// will build. Deeper bodies produce a diagnostic.
pub const MAX_PARSER_DEPTH: u32 = 256;

/// Maximum depth for the rewrite traversal. Nodes below this depth are
/// passed through unchanged.
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum depth for the printer. Matches the traversal limit so anything
/// the rewriter produced can be printed.
pub const MAX_EMIT_DEPTH: u32 = 500;
