use clap::Parser;
use std::path::Path;

use super::args::{CliArgs, NewLine};
use dts_common::NewLineKind;

#[test]
fn test_parses_positional_paths() {
    let args = CliArgs::try_parse_from(["downlevel-dts", "types", "out/ts3.4"])
        .expect("positional args should parse");

    assert_eq!(args.src, Path::new("types"));
    assert_eq!(args.target, Path::new("out/ts3.4"));
    assert_eq!(args.new_line, None);
    assert!(args.exclude.is_empty());
    assert!(!args.list_files);
    assert_eq!(args.pretty, None);
}

#[test]
fn test_parses_flags() {
    let args = CliArgs::try_parse_from([
        "downlevel-dts",
        "types",
        "out",
        "--newLine",
        "lf",
        "--exclude",
        "internal/**",
        "--exclude",
        "*.test.d.ts",
        "--listFiles",
        "--pretty",
        "false",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.new_line, Some(NewLine::Lf));
    assert_eq!(args.exclude, vec!["internal/**", "*.test.d.ts"]);
    assert!(args.list_files);
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn test_missing_target_is_a_usage_error() {
    let err = CliArgs::try_parse_from(["downlevel-dts", "types"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_new_line_is_case_insensitive() {
    let args = CliArgs::try_parse_from(["downlevel-dts", "a", "b", "--newLine", "CRLF"])
        .expect("upper-case value should parse");
    assert_eq!(args.new_line, Some(NewLine::Crlf));
}

#[test]
fn test_driver_options_default_to_crlf() {
    let args = CliArgs::try_parse_from(["downlevel-dts", "a", "b", "--pretty", "true"]).unwrap();
    let options = args.driver_options();
    assert_eq!(options.new_line, NewLineKind::CarriageReturnLineFeed);
    assert!(options.pretty);
    assert!(options.excludes.is_empty());

    let args = CliArgs::try_parse_from(["downlevel-dts", "a", "b", "--newLine", "lf"]).unwrap();
    assert_eq!(args.driver_options().new_line, NewLineKind::LineFeed);
}
