//! Scanner implementation.
//!
//! The scanner works on byte offsets into a shared `Arc<str>`. Offsets are
//! always on UTF-8 character boundaries.

use crate::char_codes::{
    is_identifier_part, is_identifier_start, is_line_break, is_white_space_single_line,
};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use dts_common::diagnostics::diagnostic_codes;
use memchr::memmem;
use rustc_hash::FxHashSet;
use std::sync::Arc;

pub mod token_flags {
    pub const NONE: u32 = 0;
    pub const PRECEDING_LINE_BREAK: u32 = 1 << 0;
    pub const UNTERMINATED: u32 = 1 << 1;
}

/// A lexical error. The parser turns these into diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub pos: u32,
    pub length: u32,
    pub code: u32,
}

/// Saved scanner position for look-ahead.
#[derive(Debug, Clone)]
pub struct ScannerSnapshot {
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: u32,
    token_value: String,
    error_count: usize,
}

pub struct ScannerState {
    text: Arc<str>,
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: u32,
    token_value: String,
    errors: Vec<ScanError>,
    /// Every identifier-shaped word seen, keywords included.
    identifiers: FxHashSet<String>,
}

impl ScannerState {
    pub fn new(text: Arc<str>) -> Self {
        ScannerState {
            text,
            pos: 0,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: token_flags::NONE,
            token_value: String::new(),
            errors: Vec::new(),
            identifiers: FxHashSet::default(),
        }
    }

    // =========================================================================
    // Token accessors
    // =========================================================================

    #[inline]
    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the token including its leading trivia.
    #[inline]
    pub fn get_token_full_start(&self) -> u32 {
        self.full_start as u32
    }

    #[inline]
    pub fn get_token_start(&self) -> u32 {
        self.token_start as u32
    }

    #[inline]
    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    /// Identifier name, or the cooked contents of a string literal.
    #[inline]
    pub fn get_token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw source text of the current token.
    #[inline]
    pub fn get_token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags & token_flags::PRECEDING_LINE_BREAK != 0
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags & token_flags::UNTERMINATED != 0
    }

    pub fn source_text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn take_errors(&mut self) -> Vec<ScanError> {
        std::mem::take(&mut self.errors)
    }

    pub fn take_identifiers(&mut self) -> FxHashSet<String> {
        std::mem::take(&mut self.identifiers)
    }

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            full_start: self.full_start,
            token_start: self.token_start,
            token: self.token,
            token_flags: self.token_flags,
            token_value: self.token_value.clone(),
            error_count: self.errors.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.full_start = snapshot.full_start;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.token_flags = snapshot.token_flags;
        self.token_value = snapshot.token_value;
        self.errors.truncate(snapshot.error_count);
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    fn error(&mut self, pos: usize, length: usize, code: u32) {
        self.errors.push(ScanError {
            pos: pos as u32,
            length: length as u32,
            code,
        });
    }

    /// Advance to the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_flags = token_flags::NONE;
        self.token_value.clear();
        self.skip_trivia();
        self.token_start = self.pos;

        let Some(ch) = self.char_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '{' => self.single(SyntaxKind::OpenBraceToken),
            '}' => self.single(SyntaxKind::CloseBraceToken),
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            '<' => self.single(SyntaxKind::LessThanToken),
            // `>` is never combined: `>>` closes two type argument lists.
            '>' => self.single(SyntaxKind::GreaterThanToken),
            '?' => self.single(SyntaxKind::QuestionToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '!' => self.single(SyntaxKind::ExclamationToken),
            '@' => self.single(SyntaxKind::AtToken),
            '|' => self.single(SyntaxKind::BarToken),
            '&' => self.single(SyntaxKind::AmpersandToken),
            '*' => self.single(SyntaxKind::AsteriskToken),
            '+' => self.single(SyntaxKind::PlusToken),
            '-' => self.single(SyntaxKind::MinusToken),
            '/' => self.single(SyntaxKind::SlashToken),
            '=' => {
                if self.byte_at(self.pos + 1) == Some(b'>') {
                    self.pos += 2;
                    SyntaxKind::EqualsGreaterThanToken
                } else {
                    self.single(SyntaxKind::EqualsToken)
                }
            }
            '.' => {
                if self.byte_at(self.pos + 1) == Some(b'.') && self.byte_at(self.pos + 2) == Some(b'.')
                {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else if self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit()) {
                    self.scan_number()
                } else {
                    self.single(SyntaxKind::DotToken)
                }
            }
            '"' | '\'' => self.scan_string(ch),
            '`' => self.scan_template(),
            '#' => {
                if self
                    .char_at(self.pos + 1)
                    .is_some_and(is_identifier_start)
                {
                    self.pos += 1;
                    self.scan_identifier_rest();
                    SyntaxKind::PrivateIdentifier
                } else {
                    self.single(SyntaxKind::OtherPunctuation)
                }
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => {
                self.scan_identifier_rest();
                let kind = text_to_keyword(&self.token_value).unwrap_or(SyntaxKind::Identifier);
                self.identifiers.insert(self.token_value.clone());
                kind
            }
            c => {
                self.pos += c.len_utf8();
                SyntaxKind::OtherPunctuation
            }
        };
        self.token
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.char_at(self.pos) {
            if is_line_break(ch) {
                self.token_flags |= token_flags::PRECEDING_LINE_BREAK;
                self.pos += ch.len_utf8();
            } else if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
            } else if ch == '/' && self.byte_at(self.pos + 1) == Some(b'/') {
                self.pos += 2;
                while let Some(c) = self.char_at(self.pos) {
                    if is_line_break(c) {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
            } else if ch == '/' && self.byte_at(self.pos + 1) == Some(b'*') {
                let start = self.pos;
                let body = &self.text.as_bytes()[self.pos + 2..];
                match memmem::find(body, b"*/") {
                    Some(offset) => {
                        let comment = &self.text[self.pos..self.pos + 2 + offset];
                        if comment.chars().any(is_line_break) {
                            self.token_flags |= token_flags::PRECEDING_LINE_BREAK;
                        }
                        self.pos += 2 + offset + 2;
                    }
                    None => {
                        self.pos = self.text.len();
                        self.error(
                            start,
                            self.pos - start,
                            diagnostic_codes::ASTERISK_SLASH_EXPECTED,
                        );
                    }
                }
            } else {
                break;
            }
        }
    }

    fn scan_identifier_rest(&mut self) {
        let start = self.pos;
        if let Some(first) = self.char_at(self.pos) {
            self.pos += first.len_utf8();
        }
        while let Some(c) = self.char_at(self.pos) {
            if !is_identifier_part(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.token_value.push_str(&self.text[start..self.pos]);
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(c) = self.char_at(self.pos) {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                let is_exponent = (c == 'e' || c == 'E')
                    && !self.text[start..self.pos].starts_with("0x")
                    && !self.text[start..self.pos].starts_with("0X");
                self.pos += 1;
                if is_exponent && matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                self.unterminated(start, diagnostic_codes::UNTERMINATED_STRING_LITERAL);
                break;
            };
            if c == quote {
                self.pos += 1;
                break;
            }
            if is_line_break(c) {
                self.unterminated(start, diagnostic_codes::UNTERMINATED_STRING_LITERAL);
                break;
            }
            if c == '\\' {
                self.pos += 1;
                if let Some(escaped) = self.char_at(self.pos) {
                    self.token_value.push(escaped);
                    self.pos += escaped.len_utf8();
                }
                continue;
            }
            self.token_value.push(c);
            self.pos += c.len_utf8();
        }
        SyntaxKind::StringLiteral
    }

    /// Scan a whole template literal, including `${ ... }` spans.
    fn scan_template(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut brace_depth = 0u32;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                self.unterminated(start, diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL);
                break;
            };
            self.pos += c.len_utf8();
            match c {
                '\\' => {
                    if let Some(escaped) = self.char_at(self.pos) {
                        self.pos += escaped.len_utf8();
                    }
                }
                '`' if brace_depth == 0 => break,
                '$' if self.byte_at(self.pos) == Some(b'{') => {
                    self.pos += 1;
                    brace_depth += 1;
                }
                '{' if brace_depth > 0 => brace_depth += 1,
                '}' if brace_depth > 0 => brace_depth -= 1,
                _ => {}
            }
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::TemplateLiteral
    }

    fn unterminated(&mut self, start: usize, code: u32) {
        self.token_flags |= token_flags::UNTERMINATED;
        self.error(start, self.pos - start, code);
    }
}
