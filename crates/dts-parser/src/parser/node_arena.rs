//! NodeArena creation methods (add_* and update_* methods).
//!
//! Every constructor appends a node, then links its children to it. Links are
//! only written for children that have no parent yet, so rebuilding a
//! container around reused children leaves the original tree's links intact.

use super::base::{NO_POS, NodeIndex, NodeList};
use super::node::*;
use dts_scanner::SyntaxKind;

impl NodeData {
    /// Visit every direct child index in source order.
    pub fn for_each_child(&self, mut f: impl FnMut(NodeIndex)) {
        let list = |list: &Option<NodeList>, f: &mut dyn FnMut(NodeIndex)| {
            if let Some(list) = list {
                list.nodes.iter().copied().for_each(&mut *f);
            }
        };
        match self {
            NodeData::None
            | NodeData::Identifier(_)
            | NodeData::Literal(_) => {}
            NodeData::Text(data) => data.type_members.iter().copied().for_each(f),
            NodeData::SourceFile(data) => data.statements.nodes.iter().copied().for_each(f),
            NodeData::Module(data) => {
                list(&data.modifiers, &mut f);
                f(data.name);
                list(&data.body, &mut f);
            }
            NodeData::Class(data) => {
                list(&data.decorators, &mut f);
                list(&data.modifiers, &mut f);
                f(data.name);
                f(data.heritage);
                data.members.nodes.iter().copied().for_each(f);
            }
            NodeData::Accessor(data) => {
                list(&data.decorators, &mut f);
                list(&data.modifiers, &mut f);
                f(data.name);
                data.parameters.nodes.iter().copied().for_each(&mut f);
                f(data.type_annotation);
                f(data.body);
            }
            NodeData::PropertyDecl(data) => {
                list(&data.decorators, &mut f);
                list(&data.modifiers, &mut f);
                f(data.name);
                f(data.type_annotation);
                f(data.initializer);
            }
            NodeData::Parameter(data) => {
                list(&data.modifiers, &mut f);
                f(data.name);
                f(data.type_annotation);
                f(data.initializer);
            }
            NodeData::ImportDecl(data) => {
                list(&data.modifiers, &mut f);
                f(data.import_clause);
                f(data.module_specifier);
                f(data.attributes);
            }
            NodeData::ImportClause(data) => {
                f(data.name);
                f(data.named_bindings);
            }
            NodeData::NamedBindings(data) => data.elements.nodes.iter().copied().for_each(f),
            NodeData::NamespaceBinding(data) => f(data.name),
            NodeData::Specifier(data) => {
                f(data.property_name);
                f(data.name);
            }
            NodeData::ExportDecl(data) => {
                list(&data.modifiers, &mut f);
                f(data.export_clause);
                f(data.module_specifier);
                f(data.attributes);
            }
            NodeData::TypeMembers(data) => data.members.nodes.iter().copied().for_each(f),
        }
    }
}

impl NodeArena {
    #[must_use]
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            extended_info: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent links
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_none() {
            return;
        }
        if let Some(info) = self.extended_info.get_mut(child.0 as usize)
            && info.parent.is_none()
        {
            info.parent = parent;
        }
    }

    /// Record the node a synthesized node replaces.
    pub fn set_original(&mut self, node: NodeIndex, original: NodeIndex) {
        if let Some(info) = self.extended_info.get_mut(node.0 as usize) {
            info.original = original;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Append a node and link its children to it.
    pub fn add_node(&mut self, kind: u16, pos: u32, end: u32, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let mut children = Vec::new();
        data.for_each_child(|child| children.push(child));
        self.nodes.push(Node {
            kind,
            pos,
            end,
            data,
        });
        self.extended_info.push(ExtendedNodeInfo::default());
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    /// Add a token node (keywords, modifiers, the `any` type).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.add_node(kind, pos, end, NodeData::None)
    }

    pub fn add_identifier(&mut self, kind: u16, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_node(
            kind,
            pos,
            end,
            NodeData::Identifier(IdentifierData {
                escaped_text: text.to_string(),
            }),
        )
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        self.add_node(kind, pos, end, NodeData::Literal(data))
    }

    /// Add a node whose payload is carried as source text.
    pub fn add_text(&mut self, kind: u16, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_text_with_type_members(kind, pos, end, text, Vec::new())
    }

    /// Add a text node that owns the accessor-bearing type bodies found
    /// inside it.
    pub fn add_text_with_type_members(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        text: &str,
        type_members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            kind,
            pos,
            end,
            NodeData::Text(TextData {
                text: text.to_string(),
                type_members,
            }),
        )
    }

    /// Create a synthesized modifier keyword.
    pub fn create_modifier(&mut self, kind: SyntaxKind) -> NodeIndex {
        self.add_token(kind as u16, NO_POS, NO_POS)
    }

    /// Create a synthesized identifier.
    pub fn create_identifier(&mut self, text: &str) -> NodeIndex {
        self.add_identifier(SyntaxKind::Identifier as u16, NO_POS, NO_POS, text)
    }

    // ============================================================================
    // Update Methods
    // ============================================================================
    //
    // Rebuild a container with a new child list. The rebuilt node keeps the
    // original's source range and points back at it via `original`.

    fn push_update(&mut self, original: NodeIndex, data: NodeData) -> NodeIndex {
        let (kind, pos, end) = match self.get(original) {
            Some(node) => (node.kind, node.pos, node.end),
            None => return original,
        };
        let updated = self.add_node(kind, pos, end, data);
        self.set_original(updated, original);
        updated
    }

    pub fn update_source_file_statements(
        &mut self,
        source_file: NodeIndex,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let Some(mut data) = self.get_source_file_at(source_file).cloned() else {
            return source_file;
        };
        data.statements.nodes = statements;
        self.push_update(source_file, NodeData::SourceFile(data))
    }

    pub fn update_module_body(&mut self, module: NodeIndex, statements: Vec<NodeIndex>) -> NodeIndex {
        let Some(mut data) = self.get(module).and_then(|n| self.get_module(n)).cloned() else {
            return module;
        };
        match data.body.as_mut() {
            Some(body) => body.nodes = statements,
            None => return module,
        }
        self.push_update(module, NodeData::Module(data))
    }

    pub fn update_class_members(&mut self, class: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        let Some(mut data) = self.get(class).and_then(|n| self.get_class(n)).cloned() else {
            return class;
        };
        data.members.nodes = members;
        self.push_update(class, NodeData::Class(data))
    }
}
