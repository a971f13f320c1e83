//! Single-pass downlevel rewrite.
//!
//! The transformer walks a file pre-order. Each node is offered to the
//! rewrite rules first:
//!
//! - a rule that fires decides the node's outcome, and its replacements are
//!   final (not visited again);
//! - otherwise the node's children are visited and the node is rebuilt only
//!   when one of them changed.
//!
//! Only files, module bodies and classes are rebuilt. Accessor signatures in
//! interfaces and type literals are still visited, and the accessor rules
//! reject them with `TransformError::MalformedTree`.
//!
//! The arena is append-only, so the output tree shares every untouched
//! subtree with the input tree.

use super::accessors::{rewrite_get_accessor, rewrite_set_accessor};
use super::errors::TransformError;
use super::reexport::split_namespace_reexport;
use super::unique_name::UniqueNameGenerator;
use dts_common::limits::MAX_AST_DEPTH;
use dts_parser::ParsedFile;
use dts_parser::parser::{NodeArena, NodeIndex, syntax_kind_ext};
use dts_parser::syntax::declaration_name_text;
use smallvec::{SmallVec, smallvec};
use tracing::debug;

/// Outcome of visiting one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitResult {
    /// Keep the node as it is.
    Unchanged,
    /// Substitute one node.
    Replace(NodeIndex),
    /// Substitute several nodes, in order.
    ReplaceMany(SmallVec<[NodeIndex; 2]>),
    /// Drop the node and its subtree.
    Remove,
}

pub struct DownlevelTransformer<'a> {
    arena: &'a mut NodeArena,
    names: UniqueNameGenerator,
    visit_depth: u32,
    rewrites: usize,
}

impl<'a> DownlevelTransformer<'a> {
    /// Create a transformer for the file rooted at `source_file`. Fresh names
    /// avoid every identifier that file contains.
    pub fn new(arena: &'a mut NodeArena, source_file: NodeIndex) -> Self {
        let identifiers = arena
            .get_source_file_at(source_file)
            .map(|sf| sf.identifiers.clone())
            .unwrap_or_default();
        DownlevelTransformer {
            arena,
            names: UniqueNameGenerator::new(identifiers),
            visit_depth: 0,
            rewrites: 0,
        }
    }

    /// Number of rules that fired so far.
    #[must_use]
    pub fn rewrites(&self) -> usize {
        self.rewrites
    }

    /// Rewrite a whole file and return the new root (the old root when
    /// nothing changed).
    pub fn transform_source_file(&mut self, root: NodeIndex) -> Result<NodeIndex, TransformError> {
        match self.visit(root)? {
            VisitResult::Replace(updated) => Ok(updated),
            VisitResult::Unchanged | VisitResult::ReplaceMany(_) | VisitResult::Remove => Ok(root),
        }
    }

    /// Visit a node and its children
    pub fn visit(&mut self, idx: NodeIndex) -> Result<VisitResult, TransformError> {
        if self.visit_depth >= MAX_AST_DEPTH {
            return Ok(VisitResult::Unchanged);
        }
        let Some(kind) = self.arena.get(idx).map(|node| node.kind) else {
            return Ok(VisitResult::Unchanged);
        };

        self.visit_depth += 1;
        let result = match kind {
            syntax_kind_ext::GET_ACCESSOR => self.visit_get_accessor(idx),
            syntax_kind_ext::SET_ACCESSOR => self.visit_set_accessor(idx),
            syntax_kind_ext::EXPORT_DECLARATION => Ok(self.visit_export_declaration(idx)),
            syntax_kind_ext::SOURCE_FILE
            | syntax_kind_ext::MODULE_DECLARATION
            | syntax_kind_ext::CLASS_DECLARATION => self.visit_container(idx, kind),
            syntax_kind_ext::INTERFACE_DECLARATION | syntax_kind_ext::TYPE_LITERAL => {
                self.visit_type_members(idx)
            }
            _ => self.visit_descendants(idx),
        };
        self.visit_depth -= 1;
        result
    }

    // =========================================================================
    // Rules
    // =========================================================================

    fn visit_get_accessor(&mut self, idx: NodeIndex) -> Result<VisitResult, TransformError> {
        let property = rewrite_get_accessor(self.arena, idx)?;
        if property == idx {
            return Ok(VisitResult::Unchanged);
        }
        self.rewrites += 1;
        debug!(
            name = declaration_name_text(self.arena, idx).unwrap_or_default(),
            "[downlevel] get accessor -> property"
        );
        Ok(VisitResult::Replace(property))
    }

    fn visit_set_accessor(&mut self, idx: NodeIndex) -> Result<VisitResult, TransformError> {
        let rewritten = rewrite_set_accessor(self.arena, idx)?;
        let name = declaration_name_text(self.arena, idx).unwrap_or_default();
        match rewritten {
            Some(property) if property == idx => Ok(VisitResult::Unchanged),
            Some(property) => {
                self.rewrites += 1;
                debug!(name, "[downlevel] set accessor -> property");
                Ok(VisitResult::Replace(property))
            }
            None => {
                self.rewrites += 1;
                debug!(name, "[downlevel] set accessor removed next to its getter");
                Ok(VisitResult::Remove)
            }
        }
    }

    fn visit_export_declaration(&mut self, idx: NodeIndex) -> VisitResult {
        match split_namespace_reexport(self.arena, idx, &mut self.names) {
            Some(bundle) => {
                self.rewrites += 1;
                debug!(
                    temp_name = bundle.temp_name.as_str(),
                    "[downlevel] namespace re-export -> import + export"
                );
                VisitResult::ReplaceMany(smallvec![bundle.import_decl, bundle.export_decl])
            }
            None => VisitResult::Unchanged,
        }
    }

    // =========================================================================
    // Containers
    // =========================================================================

    fn visit_container(&mut self, idx: NodeIndex, kind: u16) -> Result<VisitResult, TransformError> {
        let arena = &*self.arena;
        let Some(node) = arena.get(idx) else {
            return Ok(VisitResult::Unchanged);
        };
        let children = match kind {
            syntax_kind_ext::SOURCE_FILE => arena
                .get_source_file(node)
                .map(|sf| sf.statements.nodes.clone()),
            syntax_kind_ext::MODULE_DECLARATION => arena
                .get_module(node)
                .and_then(|module| module.body.as_ref())
                .map(|body| body.nodes.clone()),
            _ => arena.get_class(node).map(|class| class.members.nodes.clone()),
        };
        let Some(children) = children else {
            return Ok(VisitResult::Unchanged);
        };

        let Some(updated) = self.visit_children(&children)? else {
            return Ok(VisitResult::Unchanged);
        };
        let rebuilt = match kind {
            syntax_kind_ext::SOURCE_FILE => self.arena.update_source_file_statements(idx, updated),
            syntax_kind_ext::MODULE_DECLARATION => self.arena.update_module_body(idx, updated),
            _ => self.arena.update_class_members(idx, updated),
        };
        Ok(VisitResult::Replace(rebuilt))
    }

    /// Accessor signatures of an interface body or type literal. The
    /// accessor rules reject them, as their parent is not a class.
    fn visit_type_members(&mut self, idx: NodeIndex) -> Result<VisitResult, TransformError> {
        let arena = &*self.arena;
        let members = arena
            .get(idx)
            .and_then(|node| arena.get_type_members(node))
            .map(|data| data.members.nodes.clone())
            .unwrap_or_default();
        self.visit_children(&members)?;
        Ok(VisitResult::Unchanged)
    }

    /// Other nodes are never rebuilt, but carried text below them may hold
    /// accessor signatures.
    fn visit_descendants(&mut self, idx: NodeIndex) -> Result<VisitResult, TransformError> {
        for child in self.arena.get_children(idx) {
            self.visit(child)?;
        }
        Ok(VisitResult::Unchanged)
    }

    /// Visit each child in order. Returns the new child list, or `None` when
    /// every child came back unchanged.
    fn visit_children(
        &mut self,
        children: &[NodeIndex],
    ) -> Result<Option<Vec<NodeIndex>>, TransformError> {
        let mut changed = false;
        let mut updated = Vec::with_capacity(children.len());
        for &child in children {
            match self.visit(child)? {
                VisitResult::Unchanged => updated.push(child),
                VisitResult::Replace(replacement) => {
                    changed = true;
                    updated.push(replacement);
                }
                VisitResult::ReplaceMany(replacements) => {
                    changed = true;
                    updated.extend(replacements);
                }
                VisitResult::Remove => changed = true,
            }
        }
        Ok(changed.then_some(updated))
    }
}

/// Rewrite one parsed file.
pub fn transform_file(file: ParsedFile) -> Result<ParsedFile, TransformError> {
    let ParsedFile {
        file_name,
        mut arena,
        root,
        diagnostics,
    } = file;

    let (root, rewrites) = {
        let mut transformer = DownlevelTransformer::new(&mut arena, root);
        let root = transformer.transform_source_file(root)?;
        (root, transformer.rewrites())
    };
    debug!(file = file_name.as_str(), rewrites, "[downlevel] file rewritten");

    Ok(ParsedFile {
        file_name,
        arena,
        root,
        diagnostics,
    })
}

/// Rewrite every file independently. The result keeps input order; the
/// first error aborts the batch.
pub fn transform_all(files: Vec<ParsedFile>) -> Result<Vec<ParsedFile>, TransformError> {
    files.into_iter().map(transform_file).collect()
}

#[cfg(test)]
#[path = "tests/downlevel_tests.rs"]
mod downlevel_tests;
