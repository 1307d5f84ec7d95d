//! Golden file tests for generated output stability
//!
//! Every `tests/golden/<name>.yaml` or `<name>.toml` is generated into a
//! temporary directory and compared byte for byte with `<name>.rs`.

use std::fs;
use std::path::Path;

use errgen::{generate, GenerateOptions};
use pretty_assertions::assert_eq;

fn golden_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("golden")
}

fn run_single_golden_test(input: &Path) {
    let expected_path = input.with_extension("rs");
    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("missing expected output {:?}: {}", expected_path, e));

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("errors.rs");
    let outcome = generate(&GenerateOptions::new(input, &output))
        .unwrap_or_else(|e| panic!("generating {:?} failed: {}", input, e));

    let actual = fs::read_to_string(&output).unwrap();
    assert_eq!(actual, expected, "golden mismatch for {:?}", input);
    assert_eq!(outcome.variants, actual.matches("#[error(").count());
}

#[test]
fn golden_outputs() {
    let mut inputs: Vec<_> = fs::read_dir(golden_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "toml")
        })
        .collect();
    inputs.sort();

    assert!(!inputs.is_empty(), "no golden inputs found");
    for input in &inputs {
        run_single_golden_test(input);
    }
}

#[test]
fn golden_outputs_are_up_to_date_in_check_mode() {
    let input = golden_dir().join("plex_errors.yaml");
    let mut options = GenerateOptions::new(&input, input.with_extension("rs"));
    options.check = true;

    let outcome = generate(&options).unwrap();
    assert_eq!(outcome.status, errgen::output::OutputStatus::UpToDate);
}
