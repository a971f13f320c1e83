//! Parser state - class declarations and class members.

use super::base::{NodeIndex, NodeList};
use super::node::{AccessorData, ClassData, NodeData, ParameterData, PropertyDeclData};
use super::state::{ExtentStops, ParserState};
use super::syntax_kind_ext;
use dts_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use dts_scanner::SyntaxKind;
use tracing::trace;

/// Modifiers accepted before a class member.
const MEMBER_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PublicKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::AbstractKeyword,
    SyntaxKind::OverrideKeyword,
    SyntaxKind::AccessorKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::AsyncKeyword,
];

/// Modifiers accepted before a constructor parameter.
const PARAMETER_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PublicKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::OverrideKeyword,
];

impl ParserState {
    // =========================================================================
    // Class declarations
    // =========================================================================

    pub(crate) fn parse_class_declaration(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let decorators = self.parse_decorators();
        let modifiers = self.parse_statement_modifiers();
        self.parse_expected(SyntaxKind::ClassKeyword);

        let name = if self.token().is_identifier_or_keyword()
            && !matches!(
                self.token(),
                SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
            ) {
            self.parse_identifier_name()
        } else {
            NodeIndex::NONE
        };

        let heritage = self.parse_heritage();

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let members = if self.enter_nested() {
            self.parse_class_members()
        } else {
            self.skip_to_closing_brace();
            self.make_list(Vec::new(), self.token_full_start())
        };
        self.leave_nested();
        self.parse_expected(SyntaxKind::CloseBraceToken);

        trace!(pos, members = members.len(), "class declaration");
        self.arena.add_node(
            syntax_kind_ext::CLASS_DECLARATION,
            pos,
            self.last_token_end,
            NodeData::Class(ClassData {
                decorators,
                modifiers,
                name,
                heritage,
                members,
            }),
        )
    }

    /// Type parameters and heritage clauses, up to the class body.
    fn parse_heritage(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::OpenBraceToken) || self.is_token(SyntaxKind::EndOfFileToken) {
            return NodeIndex::NONE;
        }
        let pos = self.token_full_start();
        let start = self.token_pos();
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenBraceToken if depth == 0 => break,
                SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::LessThanToken => depth += 1,
                SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::GreaterThanToken => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.next_token();
        }
        let text = self.slice(start, self.last_token_end).to_string();
        self.arena
            .add_text(syntax_kind_ext::HERITAGE, pos, self.last_token_end, &text)
    }

    fn parse_class_members(&mut self) -> NodeList {
        let pos = self.token_full_start();
        let mut members = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken | SyntaxKind::CloseBraceToken => break,
                SyntaxKind::SemicolonToken => {
                    self.next_token();
                    continue;
                }
                _ => {}
            }
            let start = self.token_full_start();
            let member = self.parse_class_member();
            if member.is_some() {
                members.push(member);
            }
            if self.token_full_start() == start {
                self.parse_error_at_current_token(
                    diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.next_token();
            }
        }
        self.make_list(members, pos)
    }

    // =========================================================================
    // Class members
    // =========================================================================

    fn parse_class_member(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let start = self.token_pos();
        let decorators = self.parse_decorators();
        let modifiers = self.parse_class_member_modifiers();

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::OpenBracketToken) || p.is_literal_property_name()
            })
        {
            return self.parse_accessor(pos, decorators, modifiers, false);
        }

        if (self.is_token(SyntaxKind::ConstructorKeyword)
            && self.next_token_is(SyntaxKind::OpenParenToken))
            || (self.is_token(SyntaxKind::StaticKeyword)
                && self.next_token_is(SyntaxKind::OpenBraceToken))
            || self.is_index_signature()
            || self.is_token(SyntaxKind::OpenBraceToken)
            || self.is_token(SyntaxKind::OpenParenToken)
            || self.is_token(SyntaxKind::LessThanToken)
            || self.is_token(SyntaxKind::AsteriskToken)
        {
            return self.parse_verbatim_member(pos, start);
        }

        self.parse_property_or_method(pos, start, decorators, modifiers)
    }

    fn parse_class_member_modifiers(&mut self) -> Option<NodeList> {
        let pos = self.token_full_start();
        let mut modifiers = Vec::new();
        while MEMBER_MODIFIERS.contains(&self.token()) && self.next_token_can_follow_modifier() {
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

    /// `static` may be followed by a line break; other modifiers must be
    /// followed by a member name on the same line.
    fn next_token_can_follow_modifier(&mut self) -> bool {
        let is_static = self.is_token(SyntaxKind::StaticKeyword);
        self.look_ahead(|p| {
            p.next_token();
            if !is_static && p.scanner.has_preceding_line_break() {
                return false;
            }
            matches!(
                p.token(),
                SyntaxKind::OpenBracketToken | SyntaxKind::AsteriskToken | SyntaxKind::DotDotDotToken
            ) || p.is_literal_property_name()
        })
    }

    pub(crate) fn is_literal_property_name(&self) -> bool {
        self.token().is_identifier_or_keyword()
            || matches!(
                self.token(),
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::PrivateIdentifier
            )
    }

    /// `[key: T]: U` as opposed to a computed property name.
    fn is_index_signature(&mut self) -> bool {
        if !self.is_token(SyntaxKind::OpenBracketToken) {
            return false;
        }
        self.look_ahead(|p| {
            p.next_token();
            if matches!(
                p.token(),
                SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken
            ) {
                return true;
            }
            if p.token().is_modifier_keyword() {
                p.next_token();
                if p.token().is_identifier_or_keyword() {
                    return true;
                }
            } else if !p.token().is_identifier_or_keyword() {
                return false;
            } else {
                p.next_token();
            }
            match p.token() {
                SyntaxKind::ColonToken | SyntaxKind::CommaToken => true,
                SyntaxKind::QuestionToken => {
                    p.next_token();
                    matches!(
                        p.token(),
                        SyntaxKind::ColonToken
                            | SyntaxKind::CommaToken
                            | SyntaxKind::CloseBracketToken
                    )
                }
                _ => false,
            }
        })
    }

    /// Member name: identifier, private identifier, string or numeric
    /// literal, or a computed `[expr]` kept as text.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.parse_literal(),
            SyntaxKind::PrivateIdentifier => {
                let pos = self.token_full_start();
                let text = self.scanner.get_token_text().to_string();
                self.next_token();
                self.arena.add_identifier(
                    SyntaxKind::PrivateIdentifier as u16,
                    pos,
                    self.last_token_end,
                    &text,
                )
            }
            SyntaxKind::OpenBracketToken => {
                let pos = self.token_full_start();
                let start = self.token_pos();
                self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
                let text = self.slice(start, self.last_token_end).to_string();
                self.arena.add_text(
                    syntax_kind_ext::COMPUTED_PROPERTY_NAME,
                    pos,
                    self.last_token_end,
                    &text,
                )
            }
            _ => self.parse_identifier_name(),
        }
    }

    /// Get or set accessor. Class accessors end with `;` or a body; accessor
    /// signatures in type bodies (`in_type`) leave their separator to the
    /// enclosing scan.
    fn parse_accessor(
        &mut self,
        pos: u32,
        decorators: Option<NodeList>,
        modifiers: Option<NodeList>,
        in_type: bool,
    ) -> NodeIndex {
        let kind = if self.is_token(SyntaxKind::GetKeyword) {
            syntax_kind_ext::GET_ACCESSOR
        } else {
            syntax_kind_ext::SET_ACCESSOR
        };
        self.next_token();
        let name = self.parse_property_name();
        let parameters = self.parse_parameter_list();

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            let stops = if in_type {
                ExtentStops::SIGNATURE_TYPE
            } else {
                ExtentStops::RETURN_TYPE
            };
            self.parse_type_annotation(stops)
        } else {
            NodeIndex::NONE
        };

        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            let body_pos = self.token_full_start();
            let start = self.token_pos();
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
            let text = self.slice(start, self.last_token_end).to_string();
            self.arena
                .add_text(syntax_kind_ext::BLOCK, body_pos, self.last_token_end, &text)
        } else {
            if !in_type {
                self.parse_semicolon();
            }
            NodeIndex::NONE
        };

        self.arena.add_node(
            kind,
            pos,
            self.last_token_end,
            NodeData::Accessor(AccessorData {
                decorators,
                modifiers,
                name,
                parameters,
                type_annotation,
                body,
            }),
        )
    }

    /// `get x(): T` or `set x(v: T)` inside an interface body or type literal.
    pub(crate) fn parse_accessor_signature(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        self.parse_accessor(pos, None, None, true)
    }

    fn parse_property_or_method(
        &mut self,
        pos: u32,
        start: u32,
        decorators: Option<NodeList>,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        let name = self.parse_property_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        let exclamation_token = !question_token && self.parse_optional(SyntaxKind::ExclamationToken);

        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_verbatim_member(pos, start);
        }

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type_annotation(ExtentStops::PROPERTY_TYPE)
        } else {
            NodeIndex::NONE
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_verbatim(syntax_kind_ext::EXPRESSION, ExtentStops::INITIALIZER)
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();

        self.arena.add_node(
            syntax_kind_ext::PROPERTY_DECLARATION,
            pos,
            self.last_token_end,
            NodeData::PropertyDecl(PropertyDeclData {
                decorators,
                modifiers,
                name,
                question_token,
                exclamation_token,
                type_annotation,
                initializer,
            }),
        )
    }

    /// Methods, constructors, index signatures and static blocks, kept as
    /// source text from `start` (decorators included).
    fn parse_verbatim_member(&mut self, pos: u32, start: u32) -> NodeIndex {
        let extent = self.scan_extent(ExtentStops::STATEMENT);
        let end = self.last_token_end.max(start);
        let text = self.slice(start, end).to_string();
        self.arena.add_text_with_type_members(
            syntax_kind_ext::VERBATIM_MEMBER,
            pos,
            end,
            &text,
            extent.type_members,
        )
    }

    /// Type after `:`. Reports when the type is missing.
    pub(crate) fn parse_type_annotation(&mut self, stops: ExtentStops) -> NodeIndex {
        let type_node = self.parse_verbatim(syntax_kind_ext::TYPE_NODE, stops);
        if type_node.is_none() {
            self.parse_error_at_current_token(
                diagnostic_messages::TYPE_EXPECTED,
                diagnostic_codes::TYPE_EXPECTED,
            );
        }
        type_node
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    fn parse_parameter_list(&mut self) -> NodeList {
        if !self.parse_expected(SyntaxKind::OpenParenToken) {
            return self.make_list(Vec::new(), self.token_full_start());
        }
        let pos = self.token_full_start();
        let mut parameters = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_full_start();
            parameters.push(self.parse_parameter());
            if !self.parse_optional(SyntaxKind::CommaToken)
                && !self.is_token(SyntaxKind::CloseParenToken)
            {
                self.parse_expected(SyntaxKind::CommaToken);
                if self.token_full_start() == start {
                    self.next_token();
                }
            }
        }
        let list = self.make_list(parameters, pos);
        self.parse_expected(SyntaxKind::CloseParenToken);
        list
    }

    fn parse_parameter(&mut self) -> NodeIndex {
        let pos = self.token_full_start();
        let mut modifier_nodes = Vec::new();
        while PARAMETER_MODIFIERS.contains(&self.token())
            && self.look_ahead(|p| {
                p.next_token();
                p.token().is_identifier_or_keyword()
                    || matches!(
                        p.token(),
                        SyntaxKind::OpenBraceToken
                            | SyntaxKind::OpenBracketToken
                            | SyntaxKind::DotDotDotToken
                    )
            })
        {
            let kind = self.token();
            let start = self.token_full_start();
            self.next_token();
            modifier_nodes.push(self.arena.add_token(kind as u16, start, self.last_token_end));
        }
        let modifiers = if modifier_nodes.is_empty() {
            None
        } else {
            Some(NodeList::new(modifier_nodes, pos, self.last_token_end))
        };

        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = match self.token() {
            SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken => {
                let (open, close) = if self.is_token(SyntaxKind::OpenBraceToken) {
                    (SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken)
                } else {
                    (SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken)
                };
                let name_pos = self.token_full_start();
                let start = self.token_pos();
                self.skip_balanced(open, close);
                let text = self.slice(start, self.last_token_end).to_string();
                self.arena.add_text(
                    syntax_kind_ext::BINDING_PATTERN,
                    name_pos,
                    self.last_token_end,
                    &text,
                )
            }
            _ => self.parse_identifier_name(),
        };
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type_annotation(ExtentStops::PARAMETER_TYPE)
        } else {
            NodeIndex::NONE
        };
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_verbatim(syntax_kind_ext::EXPRESSION, ExtentStops::PARAMETER_INITIALIZER)
        } else {
            NodeIndex::NONE
        };

        self.arena.add_node(
            syntax_kind_ext::PARAMETER,
            pos,
            self.last_token_end,
            NodeData::Parameter(ParameterData {
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation,
                initializer,
            }),
        )
    }
}
