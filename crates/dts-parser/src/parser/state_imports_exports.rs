//! Parser state - import and export declarations.

use super::base::NodeIndex;
use super::node::{
    ExportDeclData, ImportClauseData, ImportDeclData, NamedBindingsData, NamespaceBindingData,
    NodeData, SpecifierData,
};
use super::state::ParserState;
use super::syntax_kind_ext;
use dts_scanner::SyntaxKind;

impl ParserState {
    /// `import ...` other than `import x = ...`, `import(...)` and `import.meta`.
    pub(crate) fn is_import_declaration_start(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            match p.token() {
                SyntaxKind::OpenParenToken | SyntaxKind::DotToken => false,
                SyntaxKind::StringLiteral
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::AsteriskToken => true,
                SyntaxKind::TypeKeyword => {
                    p.next_token();
                    match p.token() {
                        SyntaxKind::EqualsToken => false,
                        kind if kind.is_identifier_or_keyword() => {
                            p.next_token();
                            !p.is_token(SyntaxKind::EqualsToken)
                        }
                        _ => true,
                    }
                }
                kind if kind.is_identifier_or_keyword() => {
                    p.next_token();
                    !p.is_token(SyntaxKind::EqualsToken)
                }
                _ => false,
            }
        })
    }

    /// `export *`, `export {`, `export type {` and `export type *`.
    pub(crate) fn is_export_declaration_start(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if p.is_token(SyntaxKind::TypeKeyword) {
                p.next_token();
            }
            matches!(
                p.token(),
                SyntaxKind::AsteriskToken | SyntaxKind::OpenBraceToken
            )
        })
    }

    pub(crate) fn parse_import_declaration(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        self.parse_expected(SyntaxKind::ImportKeyword);

        let import_clause = if self.is_token(SyntaxKind::StringLiteral) {
            NodeIndex::NONE
        } else {
            let clause = self.parse_import_clause();
            self.parse_expected(SyntaxKind::FromKeyword);
            clause
        };
        let module_specifier = self.parse_module_specifier();
        let attributes = self.parse_import_attributes();
        self.parse_semicolon();

        self.arena.add_node(
            syntax_kind_ext::IMPORT_DECLARATION,
            pos,
            self.last_token_end,
            NodeData::ImportDecl(ImportDeclData {
                modifiers: None,
                import_clause,
                module_specifier,
                attributes,
            }),
        )
    }

    fn parse_import_clause(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                match p.token() {
                    SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken => true,
                    SyntaxKind::FromKeyword => {
                        p.next_token();
                        !p.is_token(SyntaxKind::StringLiteral)
                    }
                    kind => kind.is_identifier_or_keyword(),
                }
            });
        if is_type_only {
            self.next_token();
        }

        let is_default_binding = self.token().is_identifier_or_keyword()
            && !(self.is_token(SyntaxKind::FromKeyword)
                && self.next_token_is(SyntaxKind::StringLiteral));
        let name = if is_default_binding {
            let name = self.parse_identifier_name();
            self.parse_optional(SyntaxKind::CommaToken);
            name
        } else {
            NodeIndex::NONE
        };

        let named_bindings = match self.token() {
            SyntaxKind::AsteriskToken => self.parse_namespace_binding(syntax_kind_ext::NAMESPACE_IMPORT),
            SyntaxKind::OpenBraceToken => self.parse_named_bindings(
                syntax_kind_ext::NAMED_IMPORTS,
                syntax_kind_ext::IMPORT_SPECIFIER,
            ),
            _ => NodeIndex::NONE,
        };

        self.arena.add_node(
            syntax_kind_ext::IMPORT_CLAUSE,
            pos,
            self.last_token_end,
            NodeData::ImportClause(ImportClauseData {
                is_type_only,
                name,
                named_bindings,
            }),
        )
    }

    pub(crate) fn parse_export_declaration(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        self.parse_expected(SyntaxKind::ExportKeyword);
        let is_type_only = self.parse_optional(SyntaxKind::TypeKeyword);

        let (export_clause, module_specifier) = if self.is_token(SyntaxKind::AsteriskToken) {
            let clause = if self.next_token_is(SyntaxKind::AsKeyword) {
                self.parse_namespace_binding(syntax_kind_ext::NAMESPACE_EXPORT)
            } else {
                self.next_token();
                NodeIndex::NONE
            };
            self.parse_expected(SyntaxKind::FromKeyword);
            (clause, self.parse_module_specifier())
        } else {
            let clause = self.parse_named_bindings(
                syntax_kind_ext::NAMED_EXPORTS,
                syntax_kind_ext::EXPORT_SPECIFIER,
            );
            let specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
                self.parse_module_specifier()
            } else {
                NodeIndex::NONE
            };
            (clause, specifier)
        };
        let attributes = self.parse_import_attributes();
        self.parse_semicolon();

        self.arena.add_node(
            syntax_kind_ext::EXPORT_DECLARATION,
            pos,
            self.last_token_end,
            NodeData::ExportDecl(ExportDeclData {
                modifiers: None,
                is_type_only,
                export_clause,
                module_specifier,
                attributes,
            }),
        )
    }

    /// `* as name`
    fn parse_namespace_binding(&mut self, kind: u16) -> NodeIndex {
        let pos = self.token_full_start();
        self.parse_expected(SyntaxKind::AsteriskToken);
        self.parse_expected(SyntaxKind::AsKeyword);
        let name = self.parse_module_export_name();
        self.arena.add_node(
            kind,
            pos,
            self.last_token_end,
            NodeData::NamespaceBinding(NamespaceBindingData { name }),
        )
    }

    /// `{ a, type b, c as d }`
    fn parse_named_bindings(&mut self, kind: u16, element_kind: u16) -> NodeIndex {
        let pos = self.token_full_start();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let list_pos = self.token_full_start();
        let mut elements = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_full_start();
            elements.push(self.parse_specifier(element_kind));
            if !self.parse_optional(SyntaxKind::CommaToken)
                && !self.is_token(SyntaxKind::CloseBraceToken)
            {
                self.parse_expected(SyntaxKind::CommaToken);
                if self.token_full_start() == start {
                    self.next_token();
                }
            }
        }
        let elements = self.make_list(elements, list_pos);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_node(
            kind,
            pos,
            self.last_token_end,
            NodeData::NamedBindings(NamedBindingsData { elements }),
        )
    }

    fn parse_specifier(&mut self, kind: u16) -> NodeIndex {
        let pos = self.token_full_start();
        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                match p.token() {
                    SyntaxKind::CommaToken | SyntaxKind::CloseBraceToken => false,
                    SyntaxKind::AsKeyword => {
                        p.next_token();
                        // `type as`, `type as as x`: `as` is the imported name.
                        matches!(
                            p.token(),
                            SyntaxKind::CommaToken
                                | SyntaxKind::CloseBraceToken
                                | SyntaxKind::AsKeyword
                        )
                    }
                    SyntaxKind::StringLiteral => true,
                    kind => kind.is_identifier_or_keyword(),
                }
            });
        if is_type_only {
            self.next_token();
        }

        let first = self.parse_module_export_name();
        let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
            (first, self.parse_module_export_name())
        } else {
            (NodeIndex::NONE, first)
        };

        self.arena.add_node(
            kind,
            pos,
            self.last_token_end,
            NodeData::Specifier(SpecifierData {
                is_type_only,
                property_name,
                name,
            }),
        )
    }

    /// Identifier or string literal naming an import or export.
    fn parse_module_export_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal()
        } else {
            self.parse_identifier_name()
        }
    }

    /// Trailing `with { ... }` or `assert { ... }`, kept as text.
    fn parse_import_attributes(&mut self) -> NodeIndex {
        let is_attributes = self.is_token(SyntaxKind::WithKeyword)
            || (self.is_token(SyntaxKind::Identifier)
                && self.scanner.get_token_value() == "assert"
                && !self.scanner.has_preceding_line_break());
        if !is_attributes || !self.next_token_is(SyntaxKind::OpenBraceToken) {
            return NodeIndex::NONE;
        }
        let pos = self.token_full_start();
        let start = self.token_pos();
        self.next_token();
        self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
        let text = self.slice(start, self.last_token_end).to_string();
        self.arena
            .add_text(syntax_kind_ext::IMPORT_ATTRIBUTES, pos, self.last_token_end, &text)
    }
}
