//! Token and keyword kinds.
//!
//! Node kinds live in the parser's `syntax_kind_ext` module and start above
//! the last value defined here, so a node's `kind: u16` can hold either.

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    TemplateLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    GreaterThanToken,
    EqualsToken,
    EqualsGreaterThanToken,
    QuestionToken,
    ColonToken,
    ExclamationToken,
    AtToken,
    BarToken,
    AmpersandToken,
    AsteriskToken,
    PlusToken,
    MinusToken,
    SlashToken,
    OtherPunctuation,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Keywords (reserved and contextual alike; the parser decides)
    AbstractKeyword,
    AccessorKeyword,
    AnyKeyword,
    AsKeyword,
    AssertsKeyword,
    AsyncKeyword,
    ClassKeyword,
    ConstKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    DefaultKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FromKeyword,
    FunctionKeyword,
    GetKeyword,
    GlobalKeyword,
    ImplementsKeyword,
    ImportKeyword,
    InKeyword,
    InferKeyword,
    InterfaceKeyword,
    IsKeyword,
    KeyofKeyword,
    LetKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NewKeyword,
    OutKeyword,
    OverrideKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    SetKeyword,
    StaticKeyword,
    ThisKeyword,
    TypeKeyword,
    TypeofKeyword,
    UniqueKeyword,
    VarKeyword,
    WithKeyword,
}

impl SyntaxKind {
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::AbstractKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::WithKeyword;
    /// First value available for node kinds.
    pub const LAST_TOKEN_VALUE: u16 = SyntaxKind::WithKeyword as u16;

    #[inline]
    #[must_use]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    /// Identifiers and keywords both name members and bindings in declarations.
    #[inline]
    #[must_use]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == Self::Identifier || self.is_keyword()
    }

    #[must_use]
    pub fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            Self::AbstractKeyword
                | Self::AccessorKeyword
                | Self::AsyncKeyword
                | Self::ConstKeyword
                | Self::DeclareKeyword
                | Self::DefaultKeyword
                | Self::ExportKeyword
                | Self::InKeyword
                | Self::OutKeyword
                | Self::OverrideKeyword
                | Self::PrivateKeyword
                | Self::ProtectedKeyword
                | Self::PublicKeyword
                | Self::ReadonlyKeyword
                | Self::StaticKeyword
        )
    }

    /// Source text of keyword and punctuation kinds.
    #[must_use]
    pub fn to_str(self) -> Option<&'static str> {
        let text = match self {
            Self::OpenBraceToken => "{",
            Self::CloseBraceToken => "}",
            Self::OpenParenToken => "(",
            Self::CloseParenToken => ")",
            Self::OpenBracketToken => "[",
            Self::CloseBracketToken => "]",
            Self::DotToken => ".",
            Self::DotDotDotToken => "...",
            Self::SemicolonToken => ";",
            Self::CommaToken => ",",
            Self::LessThanToken => "<",
            Self::GreaterThanToken => ">",
            Self::EqualsToken => "=",
            Self::EqualsGreaterThanToken => "=>",
            Self::QuestionToken => "?",
            Self::ColonToken => ":",
            Self::ExclamationToken => "!",
            Self::AtToken => "@",
            Self::BarToken => "|",
            Self::AmpersandToken => "&",
            Self::AsteriskToken => "*",
            Self::PlusToken => "+",
            Self::MinusToken => "-",
            Self::SlashToken => "/",
            Self::AbstractKeyword => "abstract",
            Self::AccessorKeyword => "accessor",
            Self::AnyKeyword => "any",
            Self::AsKeyword => "as",
            Self::AssertsKeyword => "asserts",
            Self::AsyncKeyword => "async",
            Self::ClassKeyword => "class",
            Self::ConstKeyword => "const",
            Self::ConstructorKeyword => "constructor",
            Self::DeclareKeyword => "declare",
            Self::DefaultKeyword => "default",
            Self::EnumKeyword => "enum",
            Self::ExportKeyword => "export",
            Self::ExtendsKeyword => "extends",
            Self::FromKeyword => "from",
            Self::FunctionKeyword => "function",
            Self::GetKeyword => "get",
            Self::GlobalKeyword => "global",
            Self::ImplementsKeyword => "implements",
            Self::ImportKeyword => "import",
            Self::InKeyword => "in",
            Self::InferKeyword => "infer",
            Self::InterfaceKeyword => "interface",
            Self::IsKeyword => "is",
            Self::KeyofKeyword => "keyof",
            Self::LetKeyword => "let",
            Self::ModuleKeyword => "module",
            Self::NamespaceKeyword => "namespace",
            Self::NewKeyword => "new",
            Self::OutKeyword => "out",
            Self::OverrideKeyword => "override",
            Self::PrivateKeyword => "private",
            Self::ProtectedKeyword => "protected",
            Self::PublicKeyword => "public",
            Self::ReadonlyKeyword => "readonly",
            Self::RequireKeyword => "require",
            Self::SetKeyword => "set",
            Self::StaticKeyword => "static",
            Self::ThisKeyword => "this",
            Self::TypeKeyword => "type",
            Self::TypeofKeyword => "typeof",
            Self::UniqueKeyword => "unique",
            Self::VarKeyword => "var",
            Self::WithKeyword => "with",
            _ => return None,
        };
        Some(text)
    }

    /// Recover a token kind from a node's `kind` field.
    #[must_use]
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        ALL_KINDS.get(value as usize).copied()
    }
}

const ALL_KINDS: &[SyntaxKind] = &[
    SyntaxKind::Unknown,
    SyntaxKind::EndOfFileToken,
    SyntaxKind::NumericLiteral,
    SyntaxKind::StringLiteral,
    SyntaxKind::TemplateLiteral,
    SyntaxKind::OpenBraceToken,
    SyntaxKind::CloseBraceToken,
    SyntaxKind::OpenParenToken,
    SyntaxKind::CloseParenToken,
    SyntaxKind::OpenBracketToken,
    SyntaxKind::CloseBracketToken,
    SyntaxKind::DotToken,
    SyntaxKind::DotDotDotToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CommaToken,
    SyntaxKind::LessThanToken,
    SyntaxKind::GreaterThanToken,
    SyntaxKind::EqualsToken,
    SyntaxKind::EqualsGreaterThanToken,
    SyntaxKind::QuestionToken,
    SyntaxKind::ColonToken,
    SyntaxKind::ExclamationToken,
    SyntaxKind::AtToken,
    SyntaxKind::BarToken,
    SyntaxKind::AmpersandToken,
    SyntaxKind::AsteriskToken,
    SyntaxKind::PlusToken,
    SyntaxKind::MinusToken,
    SyntaxKind::SlashToken,
    SyntaxKind::OtherPunctuation,
    SyntaxKind::Identifier,
    SyntaxKind::PrivateIdentifier,
    SyntaxKind::AbstractKeyword,
    SyntaxKind::AccessorKeyword,
    SyntaxKind::AnyKeyword,
    SyntaxKind::AsKeyword,
    SyntaxKind::AssertsKeyword,
    SyntaxKind::AsyncKeyword,
    SyntaxKind::ClassKeyword,
    SyntaxKind::ConstKeyword,
    SyntaxKind::ConstructorKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::EnumKeyword,
    SyntaxKind::ExportKeyword,
    SyntaxKind::ExtendsKeyword,
    SyntaxKind::FromKeyword,
    SyntaxKind::FunctionKeyword,
    SyntaxKind::GetKeyword,
    SyntaxKind::GlobalKeyword,
    SyntaxKind::ImplementsKeyword,
    SyntaxKind::ImportKeyword,
    SyntaxKind::InKeyword,
    SyntaxKind::InferKeyword,
    SyntaxKind::InterfaceKeyword,
    SyntaxKind::IsKeyword,
    SyntaxKind::KeyofKeyword,
    SyntaxKind::LetKeyword,
    SyntaxKind::ModuleKeyword,
    SyntaxKind::NamespaceKeyword,
    SyntaxKind::NewKeyword,
    SyntaxKind::OutKeyword,
    SyntaxKind::OverrideKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::PublicKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::RequireKeyword,
    SyntaxKind::SetKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::ThisKeyword,
    SyntaxKind::TypeKeyword,
    SyntaxKind::TypeofKeyword,
    SyntaxKind::UniqueKeyword,
    SyntaxKind::VarKeyword,
    SyntaxKind::WithKeyword,
];

/// Keyword kind for an identifier-shaped word, if it is one.
#[must_use]
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "abstract" => SyntaxKind::AbstractKeyword,
        "accessor" => SyntaxKind::AccessorKeyword,
        "any" => SyntaxKind::AnyKeyword,
        "as" => SyntaxKind::AsKeyword,
        "asserts" => SyntaxKind::AssertsKeyword,
        "async" => SyntaxKind::AsyncKeyword,
        "class" => SyntaxKind::ClassKeyword,
        "const" => SyntaxKind::ConstKeyword,
        "constructor" => SyntaxKind::ConstructorKeyword,
        "declare" => SyntaxKind::DeclareKeyword,
        "default" => SyntaxKind::DefaultKeyword,
        "enum" => SyntaxKind::EnumKeyword,
        "export" => SyntaxKind::ExportKeyword,
        "extends" => SyntaxKind::ExtendsKeyword,
        "from" => SyntaxKind::FromKeyword,
        "function" => SyntaxKind::FunctionKeyword,
        "get" => SyntaxKind::GetKeyword,
        "global" => SyntaxKind::GlobalKeyword,
        "implements" => SyntaxKind::ImplementsKeyword,
        "import" => SyntaxKind::ImportKeyword,
        "in" => SyntaxKind::InKeyword,
        "infer" => SyntaxKind::InferKeyword,
        "interface" => SyntaxKind::InterfaceKeyword,
        "is" => SyntaxKind::IsKeyword,
        "keyof" => SyntaxKind::KeyofKeyword,
        "let" => SyntaxKind::LetKeyword,
        "module" => SyntaxKind::ModuleKeyword,
        "namespace" => SyntaxKind::NamespaceKeyword,
        "new" => SyntaxKind::NewKeyword,
        "out" => SyntaxKind::OutKeyword,
        "override" => SyntaxKind::OverrideKeyword,
        "private" => SyntaxKind::PrivateKeyword,
        "protected" => SyntaxKind::ProtectedKeyword,
        "public" => SyntaxKind::PublicKeyword,
        "readonly" => SyntaxKind::ReadonlyKeyword,
        "require" => SyntaxKind::RequireKeyword,
        "set" => SyntaxKind::SetKeyword,
        "static" => SyntaxKind::StaticKeyword,
        "this" => SyntaxKind::ThisKeyword,
        "type" => SyntaxKind::TypeKeyword,
        "typeof" => SyntaxKind::TypeofKeyword,
        "unique" => SyntaxKind::UniqueKeyword,
        "var" => SyntaxKind::VarKeyword,
        "with" => SyntaxKind::WithKeyword,
        _ => return None,
    };
    Some(kind)
}
