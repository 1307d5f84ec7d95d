use super::*;
use crate::diagnostics::error_codes::syntax;

#[test]
fn test_line_col() {
    let source = SourceFile::new("errors.yaml", "line1\nline2\nline3");

    assert_eq!(source.line_col(0), (1, 1)); // Start of line 1
    assert_eq!(source.line_col(5), (1, 6)); // End of line 1
    assert_eq!(source.line_col(6), (2, 1)); // Start of line 2
    assert_eq!(source.line_col(12), (3, 1)); // Start of line 3
}

#[test]
fn test_get_line() {
    let source = SourceFile::new("errors.yaml", "line1\r\nline2\nline3");

    assert_eq!(source.get_line(1), Some("line1"));
    assert_eq!(source.get_line(2), Some("line2"));
    assert_eq!(source.get_line(3), Some("line3"));
    assert_eq!(source.get_line(4), None);
    assert_eq!(source.get_line(0), None);
}

#[test]
fn test_file_name_strips_directories() {
    let source = SourceFile::new(PathBuf::from("defs/api/errors.yaml"), "");
    assert_eq!(source.file_name(), "errors.yaml");
}

#[test]
fn test_diagnostic_label_position() {
    let source = SourceFile::new("errors.yaml", "foo:\n  code: x\n");
    let diagnostic = source
        .diagnostic(syntax::INVALID_YAML, "invalid YAML")
        .label(13..14, "here")
        .build();

    let primary = diagnostic.primary().unwrap();
    assert_eq!(primary.line, 2);
    assert_eq!(primary.column, 9);
    assert_eq!(diagnostic.file, PathBuf::from("errors.yaml"));
}
