//! Modifier flags.

use bitflags::bitflags;
use dts_scanner::SyntaxKind;

bitflags! {
    /// Modifier set of a declaration. Bit values match TypeScript's
    /// `ModifierFlags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY = 1 << 3;
        const OVERRIDE = 1 << 4;
        const EXPORT = 1 << 5;
        const ABSTRACT = 1 << 6;
        const AMBIENT = 1 << 7;
        const STATIC = 1 << 8;
        const ACCESSOR = 1 << 9;
        const ASYNC = 1 << 10;
        const DEFAULT = 1 << 11;
        const CONST = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;
        const DECORATOR = 1 << 15;
        const DEPRECATED = 1 << 16;
    }
}

/// Order in which modifiers are written when built from flags.
pub const CANONICAL_MODIFIER_ORDER: &[(ModifierFlags, SyntaxKind)] = &[
    (ModifierFlags::EXPORT, SyntaxKind::ExportKeyword),
    (ModifierFlags::AMBIENT, SyntaxKind::DeclareKeyword),
    (ModifierFlags::DEFAULT, SyntaxKind::DefaultKeyword),
    (ModifierFlags::CONST, SyntaxKind::ConstKeyword),
    (ModifierFlags::PUBLIC, SyntaxKind::PublicKeyword),
    (ModifierFlags::PRIVATE, SyntaxKind::PrivateKeyword),
    (ModifierFlags::PROTECTED, SyntaxKind::ProtectedKeyword),
    (ModifierFlags::ABSTRACT, SyntaxKind::AbstractKeyword),
    (ModifierFlags::STATIC, SyntaxKind::StaticKeyword),
    (ModifierFlags::OVERRIDE, SyntaxKind::OverrideKeyword),
    (ModifierFlags::READONLY, SyntaxKind::ReadonlyKeyword),
    (ModifierFlags::ACCESSOR, SyntaxKind::AccessorKeyword),
    (ModifierFlags::ASYNC, SyntaxKind::AsyncKeyword),
    (ModifierFlags::IN, SyntaxKind::InKeyword),
    (ModifierFlags::OUT, SyntaxKind::OutKeyword),
];

impl ModifierFlags {
    /// Flag for a modifier keyword kind; empty for anything else.
    #[must_use]
    pub fn from_modifier_kind(kind: u16) -> ModifierFlags {
        CANONICAL_MODIFIER_ORDER
            .iter()
            .find(|(_, keyword)| *keyword as u16 == kind)
            .map_or(ModifierFlags::empty(), |(flag, _)| *flag)
    }
}
