//! Statement printing: modules, classes, imports, exports, verbatim text.

use super::Printer;
use dts_parser::parser::node::Node;
use dts_parser::parser::{NodeIndex, syntax_kind_ext};
use dts_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    pub(super) fn emit_statement(&mut self, idx: NodeIndex) {
        self.emit_with_comments(idx, Self::emit_statement_node);
    }

    fn emit_statement_node(&mut self, idx: NodeIndex, node: &'a Node) {
        match node.kind {
            syntax_kind_ext::MODULE_DECLARATION => self.emit_module_declaration(node),
            syntax_kind_ext::CLASS_DECLARATION => self.emit_class_declaration(idx, node),
            syntax_kind_ext::IMPORT_DECLARATION => self.emit_import_declaration(idx, node),
            syntax_kind_ext::EXPORT_DECLARATION => self.emit_export_declaration(idx, node),
            _ => self.emit_verbatim(idx, node),
        }
    }

    /// Text carried from the source, or the source range for nodes without
    /// a text payload.
    pub(super) fn emit_verbatim(&mut self, idx: NodeIndex, node: &'a Node) {
        let column = self.source_column(idx);
        match self.arena.get_node_text(idx) {
            Some(text) => self.write_reindented(text, column),
            None => self.emit_source_range(node),
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    fn emit_module_declaration(&mut self, node: &'a Node) {
        let arena = self.arena;
        let Some(module) = arena.get_module(node) else {
            return;
        };
        self.emit_modifiers(module.modifiers.as_ref());

        if module.keyword == SyntaxKind::GlobalKeyword as u16 {
            self.writer.write("global");
        } else {
            let keyword = SyntaxKind::try_from_u16(module.keyword)
                .and_then(SyntaxKind::to_str)
                .unwrap_or("namespace");
            self.writer.write(keyword);
            self.writer.write_space();
            self.write_node_text(module.name, 0);
        }

        match &module.body {
            Some(body) => {
                self.writer.write_space();
                self.emit_block(body, true, Self::emit_statement);
            }
            None => self.writer.write(";"),
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn emit_class_declaration(&mut self, idx: NodeIndex, node: &'a Node) {
        let arena = self.arena;
        let Some(class) = arena.get_class(node) else {
            return;
        };
        let column = self.source_column(idx);
        self.emit_decorators(class.decorators.as_ref(), column);
        self.emit_modifiers(class.modifiers.as_ref());
        self.writer.write("class");

        if class.name.is_some() {
            self.writer.write_space();
            self.write_node_text(class.name, column);
        }
        if let Some(heritage) = arena.get_node_text(class.heritage) {
            // Type parameters attach to the name: `class A<T> extends B`.
            if !heritage.starts_with('<') {
                self.writer.write_space();
            }
            self.write_reindented(heritage, column);
        }

        self.writer.write_space();
        self.emit_block(&class.members, false, Self::emit_class_member);
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    fn emit_import_declaration(&mut self, idx: NodeIndex, node: &'a Node) {
        let arena = self.arena;
        let Some(import) = arena.get_import_decl(node) else {
            return;
        };
        self.emit_modifiers(import.modifiers.as_ref());
        self.writer.write("import ");

        if let Some(clause) = arena
            .get(import.import_clause)
            .and_then(|clause| arena.get_import_clause(clause))
        {
            if clause.is_type_only {
                self.writer.write("type ");
            }
            if clause.name.is_some() {
                self.write_node_text(clause.name, 0);
                if clause.named_bindings.is_some() {
                    self.writer.write(", ");
                }
            }
            self.emit_bindings(clause.named_bindings);
            self.writer.write(" from ");
        }

        self.write_node_text(import.module_specifier, 0);
        self.emit_import_attributes(idx, import.attributes);
        self.writer.write(";");
    }

    fn emit_export_declaration(&mut self, idx: NodeIndex, node: &'a Node) {
        let arena = self.arena;
        let Some(export) = arena.get_export_decl(node) else {
            return;
        };
        self.emit_modifiers(export.modifiers.as_ref());
        self.writer.write("export");
        if export.is_type_only {
            self.writer.write(" type");
        }

        self.writer.write_space();
        if export.export_clause.is_some() {
            self.emit_bindings(export.export_clause);
        } else {
            self.writer.write("*");
        }

        if export.module_specifier.is_some() {
            self.writer.write(" from ");
            self.write_node_text(export.module_specifier, 0);
        }
        self.emit_import_attributes(idx, export.attributes);
        self.writer.write(";");
    }

    /// `* as name` or `{ a, b as c }`.
    fn emit_bindings(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        if let Some(namespace) = arena.get_namespace_binding(node) {
            self.writer.write("* as ");
            self.write_node_text(namespace.name, 0);
        } else if let Some(named) = arena.get_named_bindings(node) {
            if named.elements.is_empty() {
                self.writer.write("{}");
                return;
            }
            self.writer.write("{ ");
            for (i, &element) in named.elements.nodes.iter().enumerate() {
                if i > 0 {
                    self.writer.write(", ");
                }
                self.emit_specifier(element);
            }
            self.writer.write(" }");
        }
    }

    fn emit_specifier(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(specifier) = arena.get(idx).and_then(|node| arena.get_specifier(node)) else {
            return;
        };
        if specifier.is_type_only {
            self.writer.write("type ");
        }
        if specifier.property_name.is_some() {
            self.write_node_text(specifier.property_name, 0);
            self.writer.write(" as ");
        }
        self.write_node_text(specifier.name, 0);
    }

    fn emit_import_attributes(&mut self, statement: NodeIndex, attributes: NodeIndex) {
        if attributes.is_none() {
            return;
        }
        let column = self.source_column(statement);
        self.writer.write_space();
        self.write_node_text(attributes, column);
    }
}
