//! NodeArena access methods.
//!
//! Typed getters return `None` when the node is of a different kind, so
//! callers can chain `arena.get(idx).and_then(|n| arena.get_class(n))`.

use super::base::{NodeIndex, NodeList};
use super::flags::{CANONICAL_MODIFIER_ORDER, ModifierFlags};
use super::node::*;
use super::syntax_kind_ext;
use dts_scanner::SyntaxKind;

impl NodeArena {
    /// Get a node by index
    #[inline]
    #[must_use]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    #[must_use]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, or `NONE` for roots and synthesized nodes not yet attached.
    #[inline]
    #[must_use]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    #[must_use]
    pub fn get_original(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.original)
    }

    // ============================================================================
    // Typed Data Access
    // ============================================================================

    #[inline]
    #[must_use]
    pub fn get_identifier<'a>(&'a self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_literal<'a>(&'a self, node: &'a Node) -> Option<&'a LiteralData> {
        match &node.data {
            NodeData::Literal(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_text<'a>(&'a self, node: &'a Node) -> Option<&'a TextData> {
        match &node.data {
            NodeData::Text(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_source_file<'a>(&'a self, node: &'a Node) -> Option<&'a SourceFileData> {
        match &node.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get(index).and_then(|node| self.get_source_file(node))
    }

    #[inline]
    #[must_use]
    pub fn get_module<'a>(&'a self, node: &'a Node) -> Option<&'a ModuleData> {
        match &node.data {
            NodeData::Module(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_class<'a>(&'a self, node: &'a Node) -> Option<&'a ClassData> {
        match &node.data {
            NodeData::Class(data) => Some(data),
            _ => None,
        }
    }

    /// Get accessor data (get or set accessor).
    #[inline]
    #[must_use]
    pub fn get_accessor<'a>(&'a self, node: &'a Node) -> Option<&'a AccessorData> {
        match &node.data {
            NodeData::Accessor(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_property_decl<'a>(&'a self, node: &'a Node) -> Option<&'a PropertyDeclData> {
        match &node.data {
            NodeData::PropertyDecl(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_parameter<'a>(&'a self, node: &'a Node) -> Option<&'a ParameterData> {
        match &node.data {
            NodeData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_import_decl<'a>(&'a self, node: &'a Node) -> Option<&'a ImportDeclData> {
        match &node.data {
            NodeData::ImportDecl(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_import_clause<'a>(&'a self, node: &'a Node) -> Option<&'a ImportClauseData> {
        match &node.data {
            NodeData::ImportClause(data) => Some(data),
            _ => None,
        }
    }

    /// Named imports or named exports.
    #[inline]
    #[must_use]
    pub fn get_named_bindings<'a>(&'a self, node: &'a Node) -> Option<&'a NamedBindingsData> {
        match &node.data {
            NodeData::NamedBindings(data) => Some(data),
            _ => None,
        }
    }

    /// Namespace import or namespace export.
    #[inline]
    #[must_use]
    pub fn get_namespace_binding<'a>(
        &'a self,
        node: &'a Node,
    ) -> Option<&'a NamespaceBindingData> {
        match &node.data {
            NodeData::NamespaceBinding(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_specifier<'a>(&'a self, node: &'a Node) -> Option<&'a SpecifierData> {
        match &node.data {
            NodeData::Specifier(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_export_decl<'a>(&'a self, node: &'a Node) -> Option<&'a ExportDeclData> {
        match &node.data {
            NodeData::ExportDecl(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_type_members<'a>(&'a self, node: &'a Node) -> Option<&'a TypeMembersData> {
        match &node.data {
            NodeData::TypeMembers(data) => Some(data),
            _ => None,
        }
    }

    // ============================================================================
    // Tree Queries
    // ============================================================================

    /// Direct children in source order.
    #[must_use]
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        if let Some(node) = self.get(index) {
            node.data.for_each_child(|child| {
                if child.is_some() {
                    children.push(child);
                }
            });
        }
        children
    }

    /// Text of a leaf: identifier name, raw literal text, or carried source text.
    /// Keyword tokens yield their keyword spelling.
    #[must_use]
    pub fn get_node_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        match &node.data {
            NodeData::Identifier(data) => Some(&data.escaped_text),
            NodeData::Literal(data) => Some(&data.text),
            NodeData::Text(data) => Some(&data.text),
            NodeData::None => SyntaxKind::try_from_u16(node.kind).and_then(SyntaxKind::to_str),
            _ => None,
        }
    }

    // ============================================================================
    // Modifiers
    // ============================================================================

    /// Flags for a modifier list.
    #[must_use]
    pub fn modifiers_to_flags(&self, modifiers: Option<&NodeList>) -> ModifierFlags {
        let mut flags = ModifierFlags::empty();
        if let Some(list) = modifiers {
            for &modifier in &list.nodes {
                if let Some(node) = self.get(modifier) {
                    flags |= ModifierFlags::from_modifier_kind(node.kind);
                }
            }
        }
        flags
    }

    /// The node's own modifier list, for the kinds that carry one.
    #[must_use]
    pub fn get_modifiers(&self, index: NodeIndex) -> Option<&NodeList> {
        let node = self.get(index)?;
        match &node.data {
            NodeData::Module(data) => data.modifiers.as_ref(),
            NodeData::Class(data) => data.modifiers.as_ref(),
            NodeData::Accessor(data) => data.modifiers.as_ref(),
            NodeData::PropertyDecl(data) => data.modifiers.as_ref(),
            NodeData::Parameter(data) => data.modifiers.as_ref(),
            NodeData::ImportDecl(data) => data.modifiers.as_ref(),
            NodeData::ExportDecl(data) => data.modifiers.as_ref(),
            _ => None,
        }
    }

    /// Decorators of a class or class member.
    #[must_use]
    pub fn get_decorators(&self, index: NodeIndex) -> Option<&NodeList> {
        let node = self.get(index)?;
        match &node.data {
            NodeData::Class(data) => data.decorators.as_ref(),
            NodeData::Accessor(data) => data.decorators.as_ref(),
            NodeData::PropertyDecl(data) => data.decorators.as_ref(),
            _ => None,
        }
    }

    /// Effective modifier flags of a declaration. Class members do not
    /// inherit flags from their class, so this is the node's own set.
    #[must_use]
    pub fn get_combined_modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        let mut flags = self.modifiers_to_flags(self.get_modifiers(index));
        if self.get_decorators(index).is_some_and(|list| !list.is_empty()) {
            flags |= ModifierFlags::DECORATOR;
        }
        flags
    }

    #[must_use]
    pub fn has_modifier(&self, index: NodeIndex, flag: ModifierFlags) -> bool {
        self.modifiers_to_flags(self.get_modifiers(index))
            .contains(flag)
    }

    /// Build a modifier list from flags in canonical order.
    /// Returns `None` when no flag maps to a modifier keyword.
    pub fn create_modifiers_from_flags(&mut self, flags: ModifierFlags) -> Option<NodeList> {
        let mut nodes = Vec::new();
        for &(flag, keyword) in CANONICAL_MODIFIER_ORDER {
            if flags.contains(flag) {
                nodes.push(self.create_modifier(keyword));
            }
        }
        if nodes.is_empty() {
            None
        } else {
            Some(NodeList::synthesized(nodes))
        }
    }
}

impl Node {
    #[inline]
    #[must_use]
    pub fn is_get_accessor(&self) -> bool {
        self.kind == syntax_kind_ext::GET_ACCESSOR
    }

    #[inline]
    #[must_use]
    pub fn is_set_accessor(&self) -> bool {
        self.kind == syntax_kind_ext::SET_ACCESSOR
    }

    #[inline]
    #[must_use]
    pub fn is_class_declaration(&self) -> bool {
        self.kind == syntax_kind_ext::CLASS_DECLARATION
    }

    #[inline]
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind == SyntaxKind::Identifier as u16
    }
}
