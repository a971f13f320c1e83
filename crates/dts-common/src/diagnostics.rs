//! Diagnostics reported while scanning and parsing declaration files.
//!
//! Codes and message templates mirror the TypeScript compiler so that users
//! can look them up; only the handful the declaration parser can produce are
//! defined here.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const EXPECTED: u32 = 1005;
    pub const ASTERISK_SLASH_EXPECTED: u32 = 1010;
    pub const TYPE_EXPECTED: u32 = 1110;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const UNTERMINATED_TEMPLATE_LITERAL: u32 = 1160;
    pub const STRING_LITERAL_EXPECTED: u32 = 1141;
    pub const NESTING_TOO_DEEP: u32 = 9100;
}

pub mod diagnostic_messages {
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const IDENTIFIER_EXPECTED: &str = "Identifier expected.";
    pub const EXPECTED: &str = "'{0}' expected.";
    pub const ASTERISK_SLASH_EXPECTED: &str = "'*/' expected.";
    pub const TYPE_EXPECTED: &str = "Type expected.";
    pub const DECLARATION_OR_STATEMENT_EXPECTED: &str = "Declaration or statement expected.";
    pub const UNTERMINATED_TEMPLATE_LITERAL: &str = "Unterminated template literal.";
    pub const STRING_LITERAL_EXPECTED: &str = "String literal expected.";
    pub const NESTING_TOO_DEEP: &str = "Declarations are nested too deeply to rewrite.";
}

pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNTERMINATED_STRING_LITERAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IDENTIFIER_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASTERISK_SLASH_EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASTERISK_SLASH_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNTERMINATED_TEMPLATE_LITERAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::STRING_LITERAL_EXPECTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::STRING_LITERAL_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NESTING_TOO_DEEP,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NESTING_TOO_DEEP,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
