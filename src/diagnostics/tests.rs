use super::*;
use error_codes::{syntax, validation};

fn source() -> SourceFile {
    SourceFile::new("errors.yaml", "foo:\n  code: \"1\"\n  message: bad foo\n")
}

#[test]
fn test_builder_collects_labels_and_help() {
    let source = source();
    let err = source
        .diagnostic(validation::WRONG_TYPE, "wrong type")
        .label(13..16, "expected an integer")
        .help("remove the quotes")
        .validation_error();

    assert_eq!(err.code(), "E0203");
    assert_eq!(err.kind(), "validation");
    assert_eq!(err.to_string(), "wrong type");

    let diagnostic = err.source_diagnostic().unwrap();
    assert_eq!(diagnostic.labels.len(), 1);
    assert_eq!(diagnostic.labels[0].line, 2);
    assert_eq!(diagnostic.labels[0].column, 9);
    assert_eq!(diagnostic.help.as_deref(), Some("remove the quotes"));
}

#[test]
fn test_miette_diagnostic_impl() {
    let source = source();
    let err = source
        .diagnostic(syntax::INVALID_YAML, "mapping values are not allowed in this context")
        .label(0..3, "here")
        .parse_error();

    let code = Diagnostic::code(&err).map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("E0101"));
    assert!(Diagnostic::source_code(&err).is_some());

    let labels: Vec<LabeledSpan> = Diagnostic::labels(&err).unwrap().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 0);
    assert_eq!(labels[0].len(), 3);
    assert_eq!(labels[0].label(), Some("here"));
}

#[test]
fn test_errors_without_source_have_no_labels() {
    let err = GenError::OutputStale {
        path: PathBuf::from("out.rs"),
    };
    assert!(Diagnostic::labels(&err).is_none());
    assert!(Diagnostic::source_code(&err).is_none());
    assert!(Diagnostic::help(&err).is_some());
}

#[test]
fn test_report_json_for_source_error() {
    let source = source();
    let err = source
        .diagnostic(validation::WRONG_TYPE, "wrong type")
        .label(13..16, "expected an integer")
        .validation_error();

    let report = err.to_report();
    assert_eq!(report.file.as_deref(), Some("errors.yaml"));
    assert_eq!(report.line, Some(2));
    assert_eq!(report.column, Some(9));

    let json = report.to_json();
    assert!(json.contains("\"code\":\"E0203\""));
    assert!(json.contains("\"kind\":\"validation\""));
    assert!(json.contains("expected an integer"));
}

#[test]
fn test_report_json_snapshot() {
    let err = GenError::OutputStale {
        path: PathBuf::from("out.rs"),
    };
    insta::assert_json_snapshot!(err.to_report(), @r###"
    {
      "code": "E0402",
      "kind": "output_stale",
      "message": "`out.rs` is out of date",
      "file": "out.rs",
      "help": "run errgen without `--check` to regenerate it"
    }
    "###);
}

#[test]
fn test_input_not_found_message() {
    let err = GenError::InputNotFound {
        path: PathBuf::from("missing.yaml"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    insta::assert_snapshot!(err.to_string(), @"could not read `missing.yaml`: No such file or directory");
    assert_eq!(err.code(), "E0001");
    assert_eq!(err.to_report().file.as_deref(), Some("missing.yaml"));
}

#[test]
fn test_invalid_option_message() {
    let err = GenError::InvalidOption {
        option: "--enum-name",
        message: "`api error` is not a valid type name".to_string(),
    };
    assert_eq!(err.code(), "E0501");
    assert_eq!(
        err.to_string(),
        "invalid value for `--enum-name`: `api error` is not a valid type name"
    );
}

#[test]
fn test_every_code_is_unique() {
    let mut codes = error_codes::ALL_CODES.to_vec();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), error_codes::ALL_CODES.len());
}
