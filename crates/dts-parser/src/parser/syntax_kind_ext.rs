//! Node kinds. Values start after the last scanner token kind so a node's
//! `kind` can also hold a keyword (modifier nodes) or a literal kind.

use dts_scanner::SyntaxKind;

pub const FIRST_NODE: u16 = SyntaxKind::LAST_TOKEN_VALUE + 1;

pub const SOURCE_FILE: u16 = FIRST_NODE;
pub const QUALIFIED_NAME: u16 = FIRST_NODE + 1;
pub const COMPUTED_PROPERTY_NAME: u16 = FIRST_NODE + 2;
pub const DECORATOR: u16 = FIRST_NODE + 3;
pub const PARAMETER: u16 = FIRST_NODE + 4;
pub const BINDING_PATTERN: u16 = FIRST_NODE + 5;
pub const TYPE_NODE: u16 = FIRST_NODE + 6;
pub const EXPRESSION: u16 = FIRST_NODE + 7;
pub const BLOCK: u16 = FIRST_NODE + 8;
pub const PROPERTY_DECLARATION: u16 = FIRST_NODE + 9;
pub const GET_ACCESSOR: u16 = FIRST_NODE + 10;
pub const SET_ACCESSOR: u16 = FIRST_NODE + 11;
pub const VERBATIM_MEMBER: u16 = FIRST_NODE + 12;
pub const CLASS_DECLARATION: u16 = FIRST_NODE + 13;
pub const HERITAGE: u16 = FIRST_NODE + 14;
pub const MODULE_DECLARATION: u16 = FIRST_NODE + 15;
pub const IMPORT_DECLARATION: u16 = FIRST_NODE + 16;
pub const IMPORT_CLAUSE: u16 = FIRST_NODE + 17;
pub const NAMESPACE_IMPORT: u16 = FIRST_NODE + 18;
pub const NAMED_IMPORTS: u16 = FIRST_NODE + 19;
pub const IMPORT_SPECIFIER: u16 = FIRST_NODE + 20;
pub const EXPORT_DECLARATION: u16 = FIRST_NODE + 21;
pub const NAMESPACE_EXPORT: u16 = FIRST_NODE + 22;
pub const NAMED_EXPORTS: u16 = FIRST_NODE + 23;
pub const EXPORT_SPECIFIER: u16 = FIRST_NODE + 24;
pub const IMPORT_ATTRIBUTES: u16 = FIRST_NODE + 25;
pub const VERBATIM_STATEMENT: u16 = FIRST_NODE + 26;
/// Interface body found inside carried text.
pub const INTERFACE_DECLARATION: u16 = FIRST_NODE + 27;
/// `{ ... }` object type found inside carried text.
pub const TYPE_LITERAL: u16 = FIRST_NODE + 28;

/// Human-readable kind name for logs and error messages.
#[must_use]
pub fn kind_name(kind: u16) -> &'static str {
    match kind {
        SOURCE_FILE => "SourceFile",
        QUALIFIED_NAME => "QualifiedName",
        COMPUTED_PROPERTY_NAME => "ComputedPropertyName",
        DECORATOR => "Decorator",
        PARAMETER => "Parameter",
        BINDING_PATTERN => "BindingPattern",
        TYPE_NODE => "TypeNode",
        EXPRESSION => "Expression",
        BLOCK => "Block",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        GET_ACCESSOR => "GetAccessor",
        SET_ACCESSOR => "SetAccessor",
        VERBATIM_MEMBER => "ClassElement",
        CLASS_DECLARATION => "ClassDeclaration",
        HERITAGE => "HeritageClauses",
        MODULE_DECLARATION => "ModuleDeclaration",
        IMPORT_DECLARATION => "ImportDeclaration",
        IMPORT_CLAUSE => "ImportClause",
        NAMESPACE_IMPORT => "NamespaceImport",
        NAMED_IMPORTS => "NamedImports",
        IMPORT_SPECIFIER => "ImportSpecifier",
        EXPORT_DECLARATION => "ExportDeclaration",
        NAMESPACE_EXPORT => "NamespaceExport",
        NAMED_EXPORTS => "NamedExports",
        EXPORT_SPECIFIER => "ExportSpecifier",
        IMPORT_ATTRIBUTES => "ImportAttributes",
        VERBATIM_STATEMENT => "Statement",
        INTERFACE_DECLARATION => "InterfaceDeclaration",
        TYPE_LITERAL => "TypeLiteral",
        _ => match SyntaxKind::try_from_u16(kind) {
            Some(SyntaxKind::Identifier) => "Identifier",
            Some(SyntaxKind::PrivateIdentifier) => "PrivateIdentifier",
            Some(SyntaxKind::StringLiteral) => "StringLiteral",
            Some(SyntaxKind::NumericLiteral) => "NumericLiteral",
            Some(token) => token.to_str().unwrap_or("Token"),
            None => "Unknown",
        },
    }
}
