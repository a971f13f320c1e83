//! Declaration printer.
//!
//! Prints a (possibly rewritten) declaration tree back to source text in the
//! layout of the TypeScript printer: four-space indentation, one statement
//! or member per line, `;` after properties, imports and exports.
//!
//! Nodes the parser carries as text (types, verbatim statements and
//! members) are re-indented to the current nesting level. Comments are read
//! from the original source text:
//!
//! - leading comments before an original node, or before the node a
//!   synthesized replacement points at through `original`;
//! - trailing comments on the same line after a node;
//! - comments before a closing `}` and at end of file.
//!
//! Every line break written, including those inside carried text and
//! comments, uses the configured `NewLineKind`.

pub mod comments;
mod members;
mod statements;

use crate::source_writer::SourceWriter;
use comments::{
    CommentKind, CommentRange, column_of, get_leading_comment_ranges,
    get_trailing_comment_ranges, skip_trivia, split_lines, strip_indentation,
};
use dts_common::NewLineKind;
use dts_common::limits::MAX_EMIT_DEPTH;
use dts_parser::parser::node::Node;
use dts_parser::parser::{NO_POS, NodeArena, NodeIndex, NodeList};
use dts_parser::ParsedFile;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    pub new_line: NewLineKind,
}

pub struct Printer<'a> {
    arena: &'a NodeArena,
    source_text: &'a str,
    writer: SourceWriter,
    /// Start offsets of comments already written.
    emitted_comments: FxHashSet<u32>,
    depth: u32,
}

impl<'a> Printer<'a> {
    #[must_use]
    pub fn new(arena: &'a NodeArena, source_text: &'a str, options: PrinterOptions) -> Self {
        Printer {
            arena,
            source_text,
            writer: SourceWriter::new(options.new_line),
            emitted_comments: FxHashSet::default(),
            depth: 0,
        }
    }

    /// Print a `SOURCE_FILE` node and return the text.
    #[must_use]
    pub fn print_file(mut self, root: NodeIndex) -> String {
        let arena = self.arena;
        if let Some(source_file) = arena.get_source_file_at(root) {
            for &statement in &source_file.statements.nodes {
                self.emit_statement(statement);
            }
            self.emit_leading_comments(source_file.end_of_file_pos);
            self.writer.ensure_line_start();
        }
        self.writer.finish()
    }

    // =========================================================================
    // Node wrappers
    // =========================================================================

    /// Emit one statement or member on its own line, with its comments.
    fn emit_with_comments(&mut self, idx: NodeIndex, emit: fn(&mut Self, NodeIndex, &'a Node)) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        let span = self.comment_span(idx);
        if let Some((pos, _)) = span {
            self.emit_leading_comments(pos);
        }

        if self.depth >= MAX_EMIT_DEPTH {
            self.emit_source_range(node);
        } else {
            self.depth += 1;
            emit(self, idx, node);
            self.depth -= 1;
        }

        if let Some((_, end)) = span {
            self.emit_trailing_comments(end);
        }
        self.writer.write_line();
    }

    /// `{ ... }` around a statement or member list.
    fn emit_block(
        &mut self,
        list: &'a NodeList,
        empty_on_one_line: bool,
        emit_child: fn(&mut Self, NodeIndex),
    ) {
        self.writer.write("{");
        let has_comments = !list.is_synthesized()
            && (!get_trailing_comment_ranges(self.source_text, list.pos as usize).is_empty()
                || !get_leading_comment_ranges(self.source_text, list.end as usize).is_empty());
        if empty_on_one_line && list.is_empty() && !has_comments {
            self.writer.write(" }");
            return;
        }

        if !list.is_synthesized() {
            self.emit_trailing_comments(list.pos);
        }
        self.writer.write_line();
        self.writer.increase_indent();
        for &child in &list.nodes {
            emit_child(self, child);
        }
        if !list.is_synthesized() {
            self.emit_leading_comments(list.end);
        }
        self.writer.decrease_indent();
        self.writer.write("}");
    }

    /// Fallback for nodes nested past the depth limit.
    fn emit_source_range(&mut self, node: &Node) {
        if node.is_synthesized() {
            return;
        }
        let start = skip_trivia(self.source_text, node.pos as usize);
        let column = column_of(self.source_text, start);
        if let Some(text) = self.source_text.get(start..node.end as usize) {
            self.write_reindented(text, column);
        }
    }

    // =========================================================================
    // Source positions
    // =========================================================================

    /// Source range whose comments belong to `idx`. Synthesized nodes use the
    /// node they replace.
    fn comment_span(&self, idx: NodeIndex) -> Option<(u32, u32)> {
        let mut current = idx;
        while current.is_some() {
            let node = self.arena.get(current)?;
            if !node.is_synthesized() {
                return Some((node.pos, node.end));
            }
            current = self.arena.get_original(current);
        }
        None
    }

    /// Column of the first token of `idx` in the source, used as the base
    /// indentation of text carried from that node.
    fn source_column(&self, idx: NodeIndex) -> usize {
        self.comment_span(idx).map_or(0, |(pos, _)| {
            column_of(self.source_text, skip_trivia(self.source_text, pos as usize))
        })
    }

    // =========================================================================
    // Comments
    // =========================================================================

    fn emit_leading_comments(&mut self, pos: u32) {
        if pos == NO_POS {
            return;
        }
        for range in get_leading_comment_ranges(self.source_text, pos as usize) {
            if !self.emitted_comments.insert(range.pos) {
                continue;
            }
            self.write_comment(&range);
            if range.has_trailing_newline || range.kind == CommentKind::SingleLine {
                self.writer.write_line();
            } else {
                self.writer.write_space();
            }
        }
    }

    fn emit_trailing_comments(&mut self, end: u32) {
        if end == NO_POS {
            return;
        }
        for range in get_trailing_comment_ranges(self.source_text, end as usize) {
            if !self.emitted_comments.insert(range.pos) {
                continue;
            }
            self.writer.write_space();
            self.write_comment(&range);
        }
    }

    fn write_comment(&mut self, range: &CommentRange) {
        let text = range.text(self.source_text);
        match range.kind {
            CommentKind::SingleLine => self.writer.write(text),
            CommentKind::MultiLine => {
                let column = column_of(self.source_text, range.pos as usize);
                self.write_reindented(text, column);
            }
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Write multi-line source text at the current indentation. Continuation
    /// lines lose up to `base_column` characters of their source indentation.
    fn write_reindented(&mut self, text: &str, base_column: usize) {
        for (i, line) in split_lines(text).enumerate() {
            if i == 0 {
                self.writer.write(line);
            } else {
                self.writer.write_line();
                self.writer.write(strip_indentation(line, base_column));
            }
        }
    }

    /// Write the text of a leaf node (name, literal, type, carried text).
    fn write_node_text(&mut self, idx: NodeIndex, base_column: usize) {
        if let Some(text) = self.arena.get_node_text(idx) {
            self.write_reindented(text, base_column);
        }
    }

    fn emit_modifiers(&mut self, modifiers: Option<&NodeList>) {
        let Some(list) = modifiers else {
            return;
        };
        for &modifier in &list.nodes {
            if let Some(text) = self.arena.get_node_text(modifier) {
                self.writer.write(text);
                self.writer.write_space();
            }
        }
    }

    /// Decorators, one per line.
    fn emit_decorators(&mut self, decorators: Option<&NodeList>, base_column: usize) {
        let Some(list) = decorators else {
            return;
        };
        for &decorator in &list.nodes {
            self.writer.write("@");
            self.write_node_text(decorator, base_column);
            self.writer.write_line();
        }
    }
}

/// Print a parsed (or rewritten) file with its own source text.
#[must_use]
pub fn print_parsed_file(file: &ParsedFile, options: PrinterOptions) -> String {
    let source_text = file.source_text().map_or("", |text| &**text);
    Printer::new(&file.arena, source_text, options).print_file(file.root)
}

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
