use crate::{ScannerState, SyntaxKind};
use dts_common::diagnostics::diagnostic_codes;
use std::sync::Arc;

fn scan_all(text: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(Arc::from(text));
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.get_token_text().to_string()));
    }
    tokens
}

fn kinds(text: &str) -> Vec<SyntaxKind> {
    scan_all(text).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn test_scan_accessor_declaration() {
    assert_eq!(
        kinds("get x(): number;"),
        vec![
            SyntaxKind::GetKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
            SyntaxKind::SemicolonToken,
        ]
    );
}

#[test]
fn test_scan_namespace_reexport() {
    let tokens = scan_all("export * as utils from \"./utils\";");
    let kinds: Vec<_> = tokens.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ExportKeyword,
            SyntaxKind::AsteriskToken,
            SyntaxKind::AsKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::FromKeyword,
            SyntaxKind::StringLiteral,
            SyntaxKind::SemicolonToken,
        ]
    );
    assert_eq!(tokens[5].1, "\"./utils\"");
}

#[test]
fn test_greater_than_is_never_combined() {
    assert_eq!(
        kinds("Map<string, Array<number>>"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::CommaToken,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_arrow_and_spread_tokens() {
    assert_eq!(
        kinds("(...args: any[]) => void"),
        vec![
            SyntaxKind::OpenParenToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::Identifier,
            SyntaxKind::ColonToken,
            SyntaxKind::AnyKeyword,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_preceding_line_break_through_comments() {
    let mut scanner = ScannerState::new(Arc::from("a /* one\ntwo */ b // c\n c"));
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.get_token_value(), "b");
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.get_token_full_start(), 17);
    assert_eq!(scanner.get_token_start(), 24);
}

#[test]
fn test_string_literal_value_and_raw_text() {
    let mut scanner = ScannerState::new(Arc::from("'it\\'s'"));
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value(), "it's");
    assert_eq!(scanner.get_token_text(), "'it\\'s'");
}

#[test]
fn test_unterminated_string_reports_error() {
    let mut scanner = ScannerState::new(Arc::from("\"abc\nx"));
    scanner.scan();
    assert!(scanner.is_unterminated());
    let errors = scanner.take_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, diagnostic_codes::UNTERMINATED_STRING_LITERAL);
}

#[test]
fn test_unterminated_comment_reports_error() {
    let mut scanner = ScannerState::new(Arc::from("a /* never closed"));
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    let errors = scanner.take_errors();
    assert_eq!(errors[0].code, diagnostic_codes::ASTERISK_SLASH_EXPECTED);
}

#[test]
fn test_template_literal_with_substitutions() {
    let tokens = scan_all("type T = `a${B}c${{ x: 1 }[\"x\"]}`;");
    assert_eq!(tokens[3].0, SyntaxKind::TemplateLiteral);
    assert_eq!(tokens[3].1, "`a${B}c${{ x: 1 }[\"x\"]}`");
    assert_eq!(tokens[4].0, SyntaxKind::SemicolonToken);
}

#[test]
fn test_numbers_and_private_names() {
    assert_eq!(
        kinds("#secret 0x1F 1e+5 .5 10n"),
        vec![
            SyntaxKind::PrivateIdentifier,
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
        ]
    );
}

#[test]
fn test_snapshot_restore_rewinds_errors() {
    let mut scanner = ScannerState::new(Arc::from("x 'open"));
    scanner.scan();
    let snapshot = scanner.save_state();
    scanner.scan();
    scanner.restore_state(snapshot);
    assert_eq!(scanner.get_token_value(), "x");
    assert!(scanner.take_errors().is_empty());
}

#[test]
fn test_identifier_set_includes_keywords() {
    let mut scanner = ScannerState::new(Arc::from("export * as utils_1 from 'x'"));
    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    let identifiers = scanner.take_identifiers();
    assert!(identifiers.contains("utils_1"));
    assert!(identifiers.contains("export"));
    assert!(!identifiers.contains("x"));
}

#[test]
fn test_kind_round_trips_through_u16() {
    for kind in [
        SyntaxKind::Unknown,
        SyntaxKind::ReadonlyKeyword,
        SyntaxKind::WithKeyword,
        SyntaxKind::PrivateIdentifier,
    ] {
        assert_eq!(SyntaxKind::try_from_u16(kind as u16), Some(kind));
    }
    assert_eq!(SyntaxKind::try_from_u16(SyntaxKind::LAST_TOKEN_VALUE + 1), None);
}
