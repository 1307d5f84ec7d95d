use super::*;

fn parse(args: &[&str]) -> Cli {
    match Cli::try_parse_from(std::iter::once("errgen").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(e) => panic!("{}", e),
    }
}

#[test]
fn test_positional_arguments() {
    let cli = parse(&["errors.yaml", "src/errors.rs"]);
    let options = cli.generate_options().unwrap();
    assert_eq!(options.input, PathBuf::from("errors.yaml"));
    assert_eq!(options.output, PathBuf::from("src/errors.rs"));
    assert_eq!(options.render, RenderOptions::default());
    assert!(!options.check);
}

#[test]
fn test_both_paths_required() {
    assert!(Cli::try_parse_from(["errgen"]).is_err());
    assert!(Cli::try_parse_from(["errgen", "errors.yaml"]).is_err());
}

#[test]
fn test_options() {
    let cli = parse(&[
        "errors.toml",
        "out.rs",
        "--enum-name",
        "PlexError",
        "--repr",
        "u32",
        "--check",
        "--json",
    ]);
    let options = cli.generate_options().unwrap();
    assert_eq!(options.render.enum_name, "PlexError");
    assert_eq!(options.render.repr, Some(Repr::U32));
    assert!(options.check);
    assert!(cli.json);
}

#[test]
fn test_unknown_repr_rejected() {
    assert!(Cli::try_parse_from(["errgen", "a.yaml", "b.rs", "--repr", "u128"]).is_err());
}

#[test]
fn test_explain_needs_no_paths() {
    let cli = parse(&["--explain", "E0202"]);
    assert_eq!(cli.explain.as_deref(), Some("E0202"));
    assert!(cli.generate_options().is_none());
}

#[test]
fn test_explain_known_codes() {
    for code in crate::diagnostics::error_codes::ALL_CODES {
        let text = explain(code).unwrap_or_else(|| panic!("Missing explanation for {}", code));
        assert!(text.starts_with(code), "{} explanation should start with its code", code);
    }
    assert!(explain("E9999").is_none());
}

#[test]
fn test_summary() {
    let mut outcome = Outcome {
        input: PathBuf::from("errors.yaml"),
        output: PathBuf::from("errors.rs"),
        enum_name: "ApiError".to_string(),
        variants: 3,
        status: OutputStatus::Written,
    };
    assert_eq!(
        summary(&outcome),
        "Generated ApiError with 3 variant(s) in errors.rs"
    );

    outcome.status = OutputStatus::UpToDate;
    assert_eq!(summary(&outcome), "errors.rs is up to date (3 variant(s))");
}
