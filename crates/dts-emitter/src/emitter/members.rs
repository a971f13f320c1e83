//! Class member printing.

use super::Printer;
use dts_parser::parser::node::Node;
use dts_parser::parser::{NodeIndex, NodeList, syntax_kind_ext};

impl<'a> Printer<'a> {
    pub(super) fn emit_class_member(&mut self, idx: NodeIndex) {
        self.emit_with_comments(idx, Self::emit_class_member_node);
    }

    fn emit_class_member_node(&mut self, idx: NodeIndex, node: &'a Node) {
        match node.kind {
            syntax_kind_ext::PROPERTY_DECLARATION => self.emit_property_declaration(idx, node),
            syntax_kind_ext::GET_ACCESSOR | syntax_kind_ext::SET_ACCESSOR => {
                self.emit_accessor_declaration(idx, node);
            }
            _ => self.emit_verbatim(idx, node),
        }
    }

    /// `modifiers name?: type = initializer;`
    fn emit_property_declaration(&mut self, idx: NodeIndex, node: &'a Node) {
        let arena = self.arena;
        let Some(property) = arena.get_property_decl(node) else {
            return;
        };
        let column = self.source_column(idx);
        self.emit_decorators(property.decorators.as_ref(), column);
        self.emit_modifiers(property.modifiers.as_ref());
        self.write_node_text(property.name, column);
        if property.question_token {
            self.writer.write("?");
        }
        if property.exclamation_token {
            self.writer.write("!");
        }
        self.emit_type_annotation(property.type_annotation, column);
        self.emit_initializer(property.initializer, column);
        self.writer.write(";");
    }

    /// Accessors that survive unrewritten (printing an input tree).
    fn emit_accessor_declaration(&mut self, idx: NodeIndex, node: &'a Node) {
        let arena = self.arena;
        let Some(accessor) = arena.get_accessor(node) else {
            return;
        };
        let column = self.source_column(idx);
        self.emit_decorators(accessor.decorators.as_ref(), column);
        self.emit_modifiers(accessor.modifiers.as_ref());
        self.writer.write(if node.is_get_accessor() { "get " } else { "set " });
        self.write_node_text(accessor.name, column);
        self.emit_parameters(&accessor.parameters, column);
        self.emit_type_annotation(accessor.type_annotation, column);
        if accessor.body.is_some() {
            self.writer.write_space();
            self.write_node_text(accessor.body, column);
        } else {
            self.writer.write(";");
        }
    }

    fn emit_parameters(&mut self, parameters: &'a NodeList, column: usize) {
        self.writer.write("(");
        for (i, &param) in parameters.nodes.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            self.emit_parameter(param, column);
        }
        self.writer.write(")");
    }

    fn emit_parameter(&mut self, idx: NodeIndex, column: usize) {
        let arena = self.arena;
        let Some(param) = arena.get(idx).and_then(|node| arena.get_parameter(node)) else {
            return;
        };
        self.emit_modifiers(param.modifiers.as_ref());
        if param.dot_dot_dot_token {
            self.writer.write("...");
        }
        self.write_node_text(param.name, column);
        if param.question_token {
            self.writer.write("?");
        }
        self.emit_type_annotation(param.type_annotation, column);
        self.emit_initializer(param.initializer, column);
    }

    fn emit_type_annotation(&mut self, type_annotation: NodeIndex, column: usize) {
        if type_annotation.is_some() {
            self.writer.write(": ");
            self.write_node_text(type_annotation, column);
        }
    }

    fn emit_initializer(&mut self, initializer: NodeIndex, column: usize) {
        if initializer.is_some() {
            self.writer.write(" = ");
            self.write_node_text(initializer, column);
        }
    }
}
