use pretty_assertions::assert_eq;

use crate::error::ParserError;

use super::*;

#[test]
fn syntax_error_reports_line() {
    let err = parse_file(BROKEN, Path::new("broken.go")).unwrap_err();
    match err {
        ParserError::ParseFailed {
            path,
            line,
            message,
        } => {
            assert_eq!(path, Path::new("broken.go"));
            assert_eq!(line, 7);
            assert!(message.starts_with("syntax error"), "message: {message}");
        }
        other => panic!("expected ParseFailed, got {other:?}"),
    }
}

#[test]
fn parse_failure_display_names_file_and_line() {
    let err = parse_file(BROKEN, Path::new("pkg/broken.go")).unwrap_err();
    assert!(err.to_string().starts_with("parse failed for pkg/broken.go:7: "));
}

#[test]
fn empty_package_lowers_to_no_declarations() {
    let file = lower("package empty\n");
    assert_eq!(file.package, "empty");
    assert!(file.decls.is_empty());
}
