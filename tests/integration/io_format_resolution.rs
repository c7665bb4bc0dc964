use std::path::Path;

use context_assert::io::{Format, IoError, format_from_path, resolve_input_format};

#[test]
fn explicit_format_takes_priority() {
    let input =
        resolve_input_format(Some(Format::Yaml), Some(Path::new("in.json"))).expect("input");
    assert_eq!(input, Format::Yaml);
}

#[test]
fn extension_fallback_works() {
    let input = resolve_input_format(None, Some(Path::new("defs.yml"))).expect("input");
    assert_eq!(input, Format::Yaml);
    assert_eq!(format_from_path(Path::new("rows.NDJSON")), Some(Format::Jsonl));
    assert_eq!(format_from_path(Path::new("headers.csv")), Some(Format::Csv));
}

#[test]
fn unknown_extension_is_error() {
    let err = resolve_input_format(None, Some(Path::new("in.unknown"))).expect_err("must fail");
    match err {
        IoError::UnsupportedPathExtension { kind, .. } => assert_eq!(kind, "input"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_path_and_explicit_format_is_error() {
    let err = resolve_input_format(None, None).expect_err("must fail");
    match err {
        IoError::UnresolvedFormat { kind } => assert_eq!(kind, "input"),
        other => panic!("unexpected error: {other}"),
    }
}
