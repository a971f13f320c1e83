//! Parser state - token plumbing, diagnostics and verbatim extents.
//!
//! The parser models only the declarations the rewriter needs to see.
//! Everything else is carried as source text; `scan_extent` finds where such
//! text ends by tracking bracket depth, explicit terminators and automatic
//! semicolon insertion at line breaks.

use super::base::{NodeIndex, NodeList};
use super::node::{NodeArena, NodeData, SourceFileData, TypeMembersData};
use super::syntax_kind_ext;
use super::ParsedFile;
use dts_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message, get_message_template,
};
use dts_common::limits::MAX_PARSER_DEPTH;
use dts_scanner::{ScannerState, SyntaxKind};
use std::sync::Arc;
use tracing::trace;

/// Which tokens end a run of source text carried verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ExtentStops {
    /// `,` at depth 0 ends the extent (parameter lists).
    pub comma: bool,
    /// `=` at depth 0 ends the extent (types followed by an initializer).
    pub equals: bool,
    /// `{` after a complete type ends the extent (accessor bodies).
    pub block_body: bool,
    /// A line break after a token that can end a statement ends the extent.
    pub asi: bool,
    /// `;` is consumed as part of the extent.
    pub consume_semicolon: bool,
}

impl ExtentStops {
    pub(crate) const STATEMENT: ExtentStops = ExtentStops {
        comma: false,
        equals: false,
        block_body: false,
        asi: true,
        consume_semicolon: true,
    };
    pub(crate) const PROPERTY_TYPE: ExtentStops = ExtentStops {
        comma: false,
        equals: true,
        block_body: false,
        asi: true,
        consume_semicolon: false,
    };
    pub(crate) const RETURN_TYPE: ExtentStops = ExtentStops {
        comma: false,
        equals: false,
        block_body: true,
        asi: true,
        consume_semicolon: false,
    };
    pub(crate) const INITIALIZER: ExtentStops = ExtentStops {
        comma: false,
        equals: false,
        block_body: false,
        asi: true,
        consume_semicolon: false,
    };
    /// Return type of an accessor signature in an interface or type literal.
    pub(crate) const SIGNATURE_TYPE: ExtentStops = ExtentStops {
        comma: true,
        equals: false,
        block_body: true,
        asi: true,
        consume_semicolon: false,
    };
    pub(crate) const PARAMETER_TYPE: ExtentStops = ExtentStops {
        comma: true,
        equals: true,
        block_body: false,
        asi: false,
        consume_semicolon: false,
    };
    pub(crate) const PARAMETER_INITIALIZER: ExtentStops = ExtentStops {
        comma: true,
        equals: false,
        block_body: false,
        asi: false,
        consume_semicolon: false,
    };
}

/// Source range of a verbatim run.
pub(crate) struct Extent {
    pub start: u32,
    pub end: u32,
    /// `INTERFACE_DECLARATION` and `TYPE_LITERAL` nodes for the bodies in
    /// the run that declare accessor signatures.
    pub type_members: Vec<NodeIndex>,
}

/// A bracket opened inside a verbatim run.
struct OpenBracket {
    pos: u32,
    /// Container kind for `{`, `None` for `(` and `[`.
    body_kind: Option<u16>,
    accessors: Vec<NodeIndex>,
}

impl OpenBracket {
    fn new(pos: u32, body_kind: Option<u16>) -> OpenBracket {
        OpenBracket {
            pos,
            body_kind,
            accessors: Vec::new(),
        }
    }
}

/// Saved parser position for look-ahead.
struct ParserSnapshot {
    scanner: dts_scanner::ScannerSnapshot,
    last_token_end: u32,
    diagnostic_count: usize,
    last_error_pos: Option<u32>,
}

/// Declaration-file parser.
pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) source_text: Arc<str>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Current declaration nesting depth.
    pub(crate) depth: u32,
    /// End of the most recently consumed token.
    pub(crate) last_token_end: u32,
    last_error_pos: Option<u32>,
}

impl ParserState {
    #[must_use]
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let source_text: Arc<str> = Arc::from(source_text);
        let estimated_nodes = source_text.len() / 16;
        ParserState {
            scanner: ScannerState::new(Arc::clone(&source_text)),
            arena: NodeArena::with_capacity(estimated_nodes),
            file_name,
            source_text,
            diagnostics: Vec::new(),
            depth: 0,
            last_token_end: 0,
            last_error_pos: None,
        }
    }

    #[must_use]
    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Parse the whole file and return the `SOURCE_FILE` node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        trace!(file = %self.file_name, bytes = self.source_text.len(), "parse_source_file");
        self.next_token();
        let statements = self.parse_statement_list(true);
        let end_of_file_pos = self.token_full_start();

        for error in self.scanner.take_errors() {
            let message = get_message_template(error.code).unwrap_or("Invalid character.");
            self.diagnostics.push(Diagnostic::error(
                self.file_name.clone(),
                error.pos,
                error.length,
                message,
                error.code,
            ));
        }
        self.diagnostics.sort_by_key(|diag| diag.start);

        let data = SourceFileData {
            file_name: self.file_name.clone(),
            text: Arc::clone(&self.source_text),
            statements,
            end_of_file_pos,
            identifiers: self.scanner.take_identifiers(),
        };
        let end = self.source_text.len() as u32;
        let root = self
            .arena
            .add_node(syntax_kind_ext::SOURCE_FILE, 0, end, NodeData::SourceFile(data));
        trace!(
            file = %self.file_name,
            nodes = self.arena.len(),
            diagnostics = self.diagnostics.len(),
            "parsed"
        );
        root
    }

    #[must_use]
    pub fn into_parsed_file(self, root: NodeIndex) -> ParsedFile {
        ParsedFile {
            file_name: self.file_name,
            arena: self.arena,
            root,
            diagnostics: self.diagnostics,
        }
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.scanner.get_token()
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.scanner.get_token() == kind
    }

    /// Start of the current token, excluding trivia.
    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_start()
    }

    #[inline]
    pub(crate) fn token_full_start(&self) -> u32 {
        self.scanner.get_token_full_start()
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.get_token_end()
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        if self.token() != SyntaxKind::EndOfFileToken {
            self.last_token_end = self.token_end();
        }
        self.scanner.scan()
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        let text = kind.to_str().unwrap_or("token");
        self.parse_error_at_current_token(
            &format_message(diagnostic_messages::EXPECTED, &[text]),
            diagnostic_codes::EXPECTED,
        );
        false
    }

    /// Run `f` and rewind the scanner and diagnostics afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut ParserState) -> T) -> T {
        let snapshot = ParserSnapshot {
            scanner: self.scanner.save_state(),
            last_token_end: self.last_token_end,
            diagnostic_count: self.diagnostics.len(),
            last_error_pos: self.last_error_pos,
        };
        let result = f(self);
        self.scanner.restore_state(snapshot.scanner);
        self.last_token_end = snapshot.last_token_end;
        self.diagnostics.truncate(snapshot.diagnostic_count);
        self.last_error_pos = snapshot.last_error_pos;
        result
    }

    pub(crate) fn next_token_is(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_token(kind)
        })
    }

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.scanner.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.parse_optional(SyntaxKind::SemicolonToken) {
            return true;
        }
        if self.can_parse_semicolon() {
            return true;
        }
        self.parse_expected(SyntaxKind::SemicolonToken)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        if self.last_error_pos == Some(start) {
            return;
        }
        self.last_error_pos = Some(start);
        self.diagnostics.push(Diagnostic::error(
            self.file_name.clone(),
            start,
            length,
            message,
            code,
        ));
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Enter a nested declaration body. Returns false (after reporting) when
    /// the nesting limit is exceeded; the caller must then skip the body.
    pub(crate) fn enter_nested(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_PARSER_DEPTH {
            self.parse_error_at_current_token(
                diagnostic_messages::NESTING_TOO_DEEP,
                diagnostic_codes::NESTING_TOO_DEEP,
            );
            return false;
        }
        true
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // =========================================================================
    // Source text
    // =========================================================================

    pub(crate) fn slice(&self, start: u32, end: u32) -> &str {
        self.source_text
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Consume a bracketed group starting at the current `open` token,
    /// through its matching `close` (or end of file).
    pub(crate) fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        let mut depth = 0u32;
        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken {
                self.parse_expected(close);
                return;
            }
            if token == open {
                depth += 1;
            } else if token == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.next_token();
                    return;
                }
            }
            self.next_token();
        }
    }

    /// Consume tokens up to the end of a verbatim run and return its source
    /// range. The range is empty when no token was consumed.
    ///
    /// Accessor signatures met inside `{ ... }` are parsed as accessor nodes
    /// and grouped under an `INTERFACE_DECLARATION` or `TYPE_LITERAL` node per
    /// body; those nodes are returned alongside the range.
    pub(crate) fn scan_extent(&mut self, stops: ExtentStops) -> Extent {
        let start = self.token_pos();
        let mut open: Vec<OpenBracket> = Vec::new();
        let mut angle = 0u32;
        let mut prev: Option<SyntaxKind> = None;
        let mut interface_header = false;
        let mut type_members = Vec::new();

        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken {
                break;
            }
            if open.is_empty() {
                match token {
                    SyntaxKind::CloseBraceToken
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken => break,
                    SyntaxKind::SemicolonToken => {
                        if stops.consume_semicolon {
                            self.next_token();
                        }
                        break;
                    }
                    SyntaxKind::CommaToken if stops.comma && angle == 0 => break,
                    SyntaxKind::EqualsToken if stops.equals && angle == 0 => break,
                    SyntaxKind::OpenBraceToken
                        if stops.block_body && angle == 0 && prev.is_some_and(can_end_type) =>
                    {
                        break;
                    }
                    _ => {}
                }
                if stops.asi
                    && angle == 0
                    && self.scanner.has_preceding_line_break()
                    && prev.is_some_and(can_end_type)
                    && !is_continuation_token(token)
                {
                    break;
                }
            }
            if self.at_accessor_signature(&open, prev) {
                let accessor = self.parse_accessor_signature();
                if let Some(body) = open.last_mut() {
                    body.accessors.push(accessor);
                }
                prev = Some(SyntaxKind::CloseParenToken);
                continue;
            }
            match token {
                SyntaxKind::OpenBraceToken => {
                    let kind = if interface_header && angle == 0 {
                        interface_header = false;
                        syntax_kind_ext::INTERFACE_DECLARATION
                    } else {
                        syntax_kind_ext::TYPE_LITERAL
                    };
                    open.push(OpenBracket::new(self.token_full_start(), Some(kind)));
                }
                SyntaxKind::OpenParenToken | SyntaxKind::OpenBracketToken => {
                    open.push(OpenBracket::new(self.token_full_start(), None));
                }
                SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken => {
                    if let Some(bracket) = open.pop() {
                        let end = self.token_end();
                        type_members.extend(self.finish_type_body(bracket, end));
                    }
                }
                SyntaxKind::InterfaceKeyword => {
                    interface_header = self.look_ahead(|p| {
                        p.next_token();
                        p.token().is_identifier_or_keyword()
                    });
                }
                SyntaxKind::SemicolonToken => interface_header = false,
                SyntaxKind::LessThanToken => angle += 1,
                SyntaxKind::GreaterThanToken => angle = angle.saturating_sub(1),
                _ => {}
            }
            prev = Some(token);
            self.next_token();
        }

        // Bodies still open at end of file.
        while let Some(bracket) = open.pop() {
            let end = self.last_token_end;
            type_members.extend(self.finish_type_body(bracket, end));
        }

        let end = if prev.is_none() { start } else { self.last_token_end };
        Extent {
            start,
            end,
            type_members,
        }
    }

    /// `get`/`set` opening a member of the innermost `{ ... }`, followed by
    /// a property name and a parameter list.
    fn at_accessor_signature(&mut self, open: &[OpenBracket], prev: Option<SyntaxKind>) -> bool {
        if !matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            || !open.last().is_some_and(|bracket| bracket.body_kind.is_some())
        {
            return false;
        }
        let starts_member = matches!(
            prev,
            Some(
                SyntaxKind::OpenBraceToken | SyntaxKind::SemicolonToken | SyntaxKind::CommaToken
            )
        ) || self.scanner.has_preceding_line_break();
        if !starts_member {
            return false;
        }
        self.look_ahead(|p| {
            p.next_token();
            if p.is_token(SyntaxKind::OpenBracketToken) {
                p.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
            } else if p.is_literal_property_name() {
                p.next_token();
            } else {
                return false;
            }
            p.is_token(SyntaxKind::OpenParenToken) || p.is_token(SyntaxKind::LessThanToken)
        })
    }

    /// Node for a closed `{ ... }` that declared accessor signatures.
    fn finish_type_body(&mut self, bracket: OpenBracket, end: u32) -> Option<NodeIndex> {
        let kind = bracket.body_kind?;
        if bracket.accessors.is_empty() {
            return None;
        }
        trace!(
            pos = bracket.pos,
            accessors = bracket.accessors.len(),
            kind = syntax_kind_ext::kind_name(kind),
            "accessor signatures in carried text"
        );
        let members = NodeList::new(bracket.accessors, bracket.pos, end);
        Some(self.arena.add_node(
            kind,
            bracket.pos,
            end,
            NodeData::TypeMembers(TypeMembersData { members }),
        ))
    }

    /// Scan a verbatim run and store it as a text node of `kind`.
    /// Returns `NONE` when the run is empty.
    pub(crate) fn parse_verbatim(&mut self, kind: u16, stops: ExtentStops) -> NodeIndex {
        let pos = self.token_full_start();
        let extent = self.scan_extent(stops);
        if extent.start == extent.end {
            return NodeIndex::NONE;
        }
        let text = self.slice(extent.start, extent.end).to_string();
        self.arena
            .add_text_with_type_members(kind, pos, extent.end, &text, extent.type_members)
    }

    pub(crate) fn make_list(&self, nodes: Vec<NodeIndex>, pos: u32) -> NodeList {
        NodeList::new(nodes, pos, self.token_full_start())
    }
}

/// Whether a token can be the last token of a type or statement.
pub(crate) fn can_end_type(token: SyntaxKind) -> bool {
    match token {
        SyntaxKind::Identifier
        | SyntaxKind::PrivateIdentifier
        | SyntaxKind::NumericLiteral
        | SyntaxKind::StringLiteral
        | SyntaxKind::TemplateLiteral
        | SyntaxKind::CloseParenToken
        | SyntaxKind::CloseBracketToken
        | SyntaxKind::CloseBraceToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::SemicolonToken => true,
        SyntaxKind::ExtendsKeyword
        | SyntaxKind::ImplementsKeyword
        | SyntaxKind::KeyofKeyword
        | SyntaxKind::TypeofKeyword
        | SyntaxKind::IsKeyword
        | SyntaxKind::AsKeyword
        | SyntaxKind::InferKeyword
        | SyntaxKind::NewKeyword
        | SyntaxKind::UniqueKeyword
        | SyntaxKind::AssertsKeyword
        | SyntaxKind::ImportKeyword
        | SyntaxKind::InterfaceKeyword
        | SyntaxKind::ClassKeyword
        | SyntaxKind::FunctionKeyword
        | SyntaxKind::EnumKeyword
        | SyntaxKind::VarKeyword
        | SyntaxKind::LetKeyword
        | SyntaxKind::NamespaceKeyword
        | SyntaxKind::ModuleKeyword
        | SyntaxKind::TypeKeyword => false,
        kind => kind.is_keyword() && !kind.is_modifier_keyword(),
    }
}

/// Tokens that continue a type or declaration onto the next line.
fn is_continuation_token(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::BarToken
            | SyntaxKind::AmpersandToken
            | SyntaxKind::DotToken
            | SyntaxKind::EqualsGreaterThanToken
            | SyntaxKind::QuestionToken
            | SyntaxKind::ColonToken
            | SyntaxKind::CommaToken
            | SyntaxKind::EqualsToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::OpenParenToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::ExtendsKeyword
            | SyntaxKind::ImplementsKeyword
            | SyntaxKind::IsKeyword
    )
}
