//! Parser state - statements, module declarations and shared leaf parsers.

use super::base::{NodeIndex, NodeList};
use super::node::{LiteralData, ModuleData, NodeData};
use super::state::{ExtentStops, ParserState};
use super::syntax_kind_ext;
use dts_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use dts_scanner::SyntaxKind;
use tracing::trace;

/// Statement-level modifiers skipped when classifying a declaration.
const STATEMENT_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::ExportKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::AbstractKeyword,
];

/// What a statement turned out to be after skipping decorators and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationStart {
    Class,
    Module,
    Other,
}

impl ParserState {
    /// Parse statements until end of file (top level) or a closing `}`.
    pub(crate) fn parse_statement_list(&mut self, top_level: bool) -> NodeList {
        let pos = self.token_full_start();
        let mut statements = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::CloseBraceToken if !top_level => break,
                SyntaxKind::CloseBraceToken => {
                    self.parse_error_at_current_token(
                        diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
                        diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                    );
                    self.next_token();
                    continue;
                }
                SyntaxKind::SemicolonToken => {
                    self.next_token();
                    continue;
                }
                _ => {}
            }
            let start = self.token_full_start();
            let statement = self.parse_statement();
            if statement.is_some() {
                statements.push(statement);
            }
            if self.token_full_start() == start {
                // No progress; drop the offending token.
                self.parse_error_at_current_token(
                    diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.next_token();
            }
        }
        self.make_list(statements, pos)
    }

    fn parse_statement(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::ImportKeyword if self.is_import_declaration_start() => {
                return self.parse_import_declaration();
            }
            SyntaxKind::ExportKeyword if self.is_export_declaration_start() => {
                return self.parse_export_declaration();
            }
            _ => {}
        }
        match self.look_ahead(Self::classify_declaration) {
            DeclarationStart::Class => self.parse_class_declaration(),
            DeclarationStart::Module => self.parse_module_declaration(),
            DeclarationStart::Other => self.parse_verbatim_statement(),
        }
    }

    fn classify_declaration(&mut self) -> DeclarationStart {
        while self.is_token(SyntaxKind::AtToken) {
            self.next_token();
            self.skip_decorator_expression();
        }
        while STATEMENT_MODIFIERS.contains(&self.token()) {
            self.next_token();
        }
        match self.token() {
            SyntaxKind::ClassKeyword => DeclarationStart::Class,
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword => {
                self.next_token();
                let has_name = self.token().is_identifier_or_keyword()
                    || self.is_token(SyntaxKind::StringLiteral);
                if has_name && !self.scanner.has_preceding_line_break() {
                    DeclarationStart::Module
                } else {
                    DeclarationStart::Other
                }
            }
            SyntaxKind::GlobalKeyword => {
                self.next_token();
                if self.is_token(SyntaxKind::OpenBraceToken) {
                    DeclarationStart::Module
                } else {
                    DeclarationStart::Other
                }
            }
            _ => DeclarationStart::Other,
        }
    }

    /// A statement carried through as source text.
    fn parse_verbatim_statement(&mut self) -> NodeIndex {
        self.parse_verbatim(syntax_kind_ext::VERBATIM_STATEMENT, ExtentStops::STATEMENT)
    }

    // =========================================================================
    // Module declarations
    // =========================================================================

    /// `namespace A.B { }`, `module "x" { }`, `module "x";`, `global { }`
    fn parse_module_declaration(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let modifiers = self.parse_statement_modifiers();
        let keyword = self.token();
        self.next_token();

        let name = match keyword {
            SyntaxKind::GlobalKeyword => {
                let start = self.last_token_end - "global".len() as u32;
                self.arena
                    .add_identifier(SyntaxKind::Identifier as u16, start, self.last_token_end, "global")
            }
            _ if self.is_token(SyntaxKind::StringLiteral) => self.parse_literal(),
            _ => self.parse_entity_name(),
        };

        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            Some(self.parse_module_block())
        } else {
            self.parse_semicolon();
            None
        };

        trace!(pos, keyword = ?keyword, "module declaration");
        self.arena.add_node(
            syntax_kind_ext::MODULE_DECLARATION,
            pos,
            self.last_token_end,
            NodeData::Module(ModuleData {
                modifiers,
                keyword: keyword as u16,
                name,
                body,
            }),
        )
    }

    fn parse_module_block(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let statements = if self.enter_nested() {
            self.parse_statement_list(false)
        } else {
            self.skip_to_closing_brace();
            self.make_list(Vec::new(), self.token_full_start())
        };
        self.leave_nested();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        statements
    }

    /// Skip everything up to (not including) the `}` that closes the
    /// current block.
    pub(crate) fn skip_to_closing_brace(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => return,
                SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBraceToken if depth == 0 => return,
                SyntaxKind::CloseBraceToken => depth -= 1,
                _ => {}
            }
            self.next_token();
        }
    }

    /// `A` or `A.B.C`. Dotted names are kept as one `QUALIFIED_NAME` text node.
    fn parse_entity_name(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let start = self.token_pos();
        let first = self.parse_identifier_name();
        if !self.is_token(SyntaxKind::DotToken) {
            return first;
        }
        while self.parse_optional(SyntaxKind::DotToken) {
            self.parse_identifier_name();
        }
        let text = self.slice(start, self.last_token_end).to_string();
        let text: String = text.split_whitespace().collect();
        self.arena
            .add_text(syntax_kind_ext::QUALIFIED_NAME, pos, self.last_token_end, &text)
    }

    // =========================================================================
    // Shared leaf parsers
    // =========================================================================

    /// Identifier or keyword used as a name.
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if !self.token().is_identifier_or_keyword() {
            self.parse_error_at_current_token(
                diagnostic_messages::IDENTIFIER_EXPECTED,
                diagnostic_codes::IDENTIFIER_EXPECTED,
            );
            let pos = self.token_full_start();
            return self
                .arena
                .add_identifier(SyntaxKind::Identifier as u16, pos, pos, "");
        }
        let pos = self.token_full_start();
        let text = self.scanner.get_token_value().to_string();
        self.next_token();
        self.arena
            .add_identifier(SyntaxKind::Identifier as u16, pos, self.last_token_end, &text)
    }

    /// String or numeric literal at the current token.
    pub(crate) fn parse_literal(&mut self) -> NodeIndex {
        let kind = self.token();
        let pos = self.token_full_start();
        let data = LiteralData {
            text: self.scanner.get_token_text().to_string(),
            value: self.scanner.get_token_value().to_string(),
        };
        self.next_token();
        self.arena
            .add_literal(kind as u16, pos, self.last_token_end, data)
    }

    /// Module specifier string. Reports and returns `NONE` when missing.
    pub(crate) fn parse_module_specifier(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal()
        } else {
            self.parse_error_at_current_token(
                diagnostic_messages::STRING_LITERAL_EXPECTED,
                diagnostic_codes::STRING_LITERAL_EXPECTED,
            );
            NodeIndex::NONE
        }
    }

    /// `export`, `declare`, `default`, `abstract` before a declaration.
    pub(crate) fn parse_statement_modifiers(&mut self) -> Option<NodeList> {
        let pos = self.token_full_start();
        let mut modifiers = Vec::new();
        while STATEMENT_MODIFIERS.contains(&self.token()) {
            let kind = self.token();
            let start = self.token_full_start();
            self.next_token();
            modifiers.push(self.arena.add_token(kind as u16, start, self.last_token_end));
        }
        if modifiers.is_empty() {
            None
        } else {
            Some(NodeList::new(modifiers, pos, self.last_token_end))
        }
    }

    /// `@expr` decorators. Each is stored as its expression text.
    pub(crate) fn parse_decorators(&mut self) -> Option<NodeList> {
        let pos = self.token_full_start();
        let mut decorators = Vec::new();
        while self.is_token(SyntaxKind::AtToken) {
            let node_pos = self.token_full_start();
            self.next_token();
            let start = self.token_pos();
            self.skip_decorator_expression();
            let text = self.slice(start, self.last_token_end).to_string();
            decorators.push(self.arena.add_text(
                syntax_kind_ext::DECORATOR,
                node_pos,
                self.last_token_end,
                &text,
            ));
        }
        if decorators.is_empty() {
            None
        } else {
            Some(NodeList::new(decorators, pos, self.last_token_end))
        }
    }

    /// Skip a decorator expression: `(expr)`, or a dotted name followed by
    /// call arguments and further member accesses.
    pub(crate) fn skip_decorator_expression(&mut self) {
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
            return;
        }
        if !self.token().is_identifier_or_keyword() {
            self.parse_error_at_current_token(
                diagnostic_messages::IDENTIFIER_EXPECTED,
                diagnostic_codes::IDENTIFIER_EXPECTED,
            );
            return;
        }
        self.next_token();
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    if self.token().is_identifier_or_keyword()
                        || self.is_token(SyntaxKind::PrivateIdentifier)
                    {
                        self.next_token();
                    }
                }
                SyntaxKind::OpenParenToken => {
                    self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
                }
                SyntaxKind::LessThanToken if !self.scanner.has_preceding_line_break() => {
                    self.skip_balanced(SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken);
                }
                _ => break,
            }
        }
    }
}
