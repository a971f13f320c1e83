//! Node storage types.
//!
//! A node is a kind tag plus a kind-specific payload (`NodeData`). Children
//! are referenced by `NodeIndex` and owned top-down through the payloads;
//! parent links live in a separate side table (`ExtendedNodeInfo`) filled
//! in when a node is first attached to a parent.

use super::base::{NO_POS, NodeIndex, NodeList};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// A `SyntaxKind` token value or a `syntax_kind_ext` node kind.
    pub kind: u16,
    /// Full start, including leading trivia. `NO_POS` for synthesized nodes.
    pub pos: u32,
    /// End of the node's last token.
    pub end: u32,
    pub data: NodeData,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.pos == NO_POS
    }
}

/// Kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Tokens and keywords (modifiers, the `any` keyword type).
    None,
    Identifier(IdentifierData),
    Literal(LiteralData),
    /// Source text carried through unchanged (types, verbatim statements,
    /// computed names, decorators, heritage clauses, ...).
    Text(TextData),
    SourceFile(SourceFileData),
    Module(ModuleData),
    Class(ClassData),
    Accessor(AccessorData),
    PropertyDecl(PropertyDeclData),
    Parameter(ParameterData),
    ImportDecl(ImportDeclData),
    ImportClause(ImportClauseData),
    NamedBindings(NamedBindingsData),
    NamespaceBinding(NamespaceBindingData),
    Specifier(SpecifierData),
    ExportDecl(ExportDeclData),
    TypeMembers(TypeMembersData),
}

/// Identifier or private identifier (`#name`, stored with the `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String or numeric literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralData {
    /// Raw source text, quotes included.
    pub text: String,
    /// Cooked value (string contents without quotes or escapes).
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub text: String,
    /// Interface bodies and type literals inside `text` that declare
    /// accessor signatures.
    pub type_members: Vec<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileData {
    pub file_name: String,
    pub text: Arc<str>,
    pub statements: NodeList,
    /// Full start of the end-of-file token; trailing comments start here.
    pub end_of_file_pos: u32,
    /// Every identifier-shaped word in the file.
    pub identifiers: FxHashSet<String>,
}

/// `namespace A.B {}`, `module "x" {}`, `global {}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    /// `NamespaceKeyword`, `ModuleKeyword` or `GlobalKeyword`.
    pub keyword: u16,
    pub name: NodeIndex,
    /// `None` for shorthand ambient modules (`declare module "x";`).
    pub body: Option<NodeList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    /// Type parameters and heritage clauses, verbatim.
    pub heritage: NodeIndex,
    pub members: NodeList,
}

/// Get or set accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    /// `NONE` for side-effect imports (`import "x";`).
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
    pub attributes: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    pub name: NodeIndex,
    /// `NAMESPACE_IMPORT`, `NAMED_IMPORTS` or `NONE`.
    pub named_bindings: NodeIndex,
}

/// `{ a, b as c }` for both imports and exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBindingsData {
    pub elements: NodeList,
}

/// `* as name` for both imports and exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBindingData {
    pub name: NodeIndex,
}

/// `[type] property_name as name`, or just `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    /// `NAMESPACE_EXPORT`, `NAMED_EXPORTS`, or `NONE` for `export *`.
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
    pub attributes: NodeIndex,
}

/// Accessor signatures of an interface body or type literal. Other
/// members stay in the enclosing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMembersData {
    pub members: NodeList,
}

/// Side-table entry for each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtendedNodeInfo {
    /// First container the node was attached to.
    pub parent: NodeIndex,
    /// Node this one was created to replace, if any.
    pub original: NodeIndex,
}

/// Append-only node storage.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) extended_info: Vec<ExtendedNodeInfo>,
}
