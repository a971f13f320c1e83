//! `export * as ns from "m"` to an import plus a named export.
//!
//! ```text
//! export * as ns from "m";   ->   import * as ns_1 from "m";
//!                                 export { ns_1 as ns } from "m";
//! ```

use super::unique_name::UniqueNameGenerator;
use dts_parser::parser::node::{
    ExportDeclData, ImportClauseData, ImportDeclData, NamedBindingsData, NamespaceBindingData,
    SpecifierData,
};
use dts_parser::parser::{NO_POS, NodeArena, NodeData, NodeIndex, NodeList, syntax_kind_ext};

/// The two statements replacing a namespace re-export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReexportBundle {
    pub temp_name: String,
    pub import_decl: NodeIndex,
    pub export_decl: NodeIndex,
}

/// Bound name of `export * as <name> from "m"`, or `None` when `idx` is any
/// other export form.
#[must_use]
pub fn namespace_reexport_name(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
    let export = arena.get(idx).and_then(|node| arena.get_export_decl(node))?;
    if export.is_type_only || export.module_specifier.is_none() {
        return None;
    }
    let clause = arena.get(export.export_clause)?;
    if clause.kind != syntax_kind_ext::NAMESPACE_EXPORT {
        return None;
    }
    arena.get_namespace_binding(clause).map(|binding| binding.name)
}

/// Text a fresh name is derived from: the identifier, or the value of a
/// string-literal export name.
fn binding_base_name(arena: &NodeArena, name: NodeIndex) -> String {
    let Some(node) = arena.get(name) else {
        return String::new();
    };
    if let Some(literal) = arena.get_literal(node) {
        return literal.value.clone();
    }
    arena.get_node_text(name).unwrap_or_default().to_string()
}

/// Build the import/export pair for a namespace re-export.
pub fn split_namespace_reexport(
    arena: &mut NodeArena,
    idx: NodeIndex,
    names: &mut UniqueNameGenerator,
) -> Option<ReexportBundle> {
    let exported_name = namespace_reexport_name(arena, idx)?;
    let export = arena.get(idx).and_then(|node| arena.get_export_decl(node))?;
    let modifiers = export.modifiers.clone();
    let module_specifier = export.module_specifier;
    let attributes = export.attributes;

    let temp_name = names.make_unique_name(&binding_base_name(arena, exported_name));

    // import * as temp from "m";
    let import_binding = arena.create_identifier(&temp_name);
    let namespace_import = arena.add_node(
        syntax_kind_ext::NAMESPACE_IMPORT,
        NO_POS,
        NO_POS,
        NodeData::NamespaceBinding(NamespaceBindingData {
            name: import_binding,
        }),
    );
    let import_clause = arena.add_node(
        syntax_kind_ext::IMPORT_CLAUSE,
        NO_POS,
        NO_POS,
        NodeData::ImportClause(ImportClauseData {
            is_type_only: false,
            name: NodeIndex::NONE,
            named_bindings: namespace_import,
        }),
    );
    let import_decl = arena.add_node(
        syntax_kind_ext::IMPORT_DECLARATION,
        NO_POS,
        NO_POS,
        NodeData::ImportDecl(ImportDeclData {
            modifiers,
            import_clause,
            module_specifier,
            attributes,
        }),
    );
    arena.set_original(import_decl, idx);

    // export { temp as ns } from "m";
    let local_name = arena.create_identifier(&temp_name);
    let specifier = arena.add_node(
        syntax_kind_ext::EXPORT_SPECIFIER,
        NO_POS,
        NO_POS,
        NodeData::Specifier(SpecifierData {
            is_type_only: false,
            property_name: local_name,
            name: exported_name,
        }),
    );
    let named_exports = arena.add_node(
        syntax_kind_ext::NAMED_EXPORTS,
        NO_POS,
        NO_POS,
        NodeData::NamedBindings(NamedBindingsData {
            elements: NodeList::synthesized(vec![specifier]),
        }),
    );
    let export_decl = arena.add_node(
        syntax_kind_ext::EXPORT_DECLARATION,
        NO_POS,
        NO_POS,
        NodeData::ExportDecl(ExportDeclData {
            modifiers: None,
            is_type_only: false,
            export_clause: named_exports,
            module_specifier,
            attributes,
        }),
    );

    Some(ReexportBundle {
        temp_name,
        import_decl,
        export_decl,
    })
}

#[cfg(test)]
#[path = "tests/reexport_tests.rs"]
mod reexport_tests;
