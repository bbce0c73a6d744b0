//! Running the screener-ui binary end to end

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;
use test_log::test;

use screener_ui::ui::app::LOAD_ERROR_MESSAGE;

use crate::common::logging::log_test_step;

const DEMO_DOCUMENT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/screener_results.json");

/// Run the binary from `dir` with no SCREENER_* variables inherited
fn run_cli(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_screener-ui"));
    command.current_dir(dir).args(args);
    for key in [
        "SCREENER_SOURCE",
        "SCREENER_BASE_URL",
        "SCREENER_CURRENCY",
        "SCREENER_PAGE_TITLE",
    ] {
        command.env_remove(key);
    }
    command.envs(vars.iter().copied());
    command.output().unwrap()
}

#[test]
fn test_missing_source_writes_error_page_and_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.json");
    let output = dir.path().join("index.html");

    log_test_step("Running against a missing result document");
    let run = run_cli(
        dir.path(),
        &["--source", input.to_str().unwrap(), "--output", output.to_str().unwrap()],
        &[],
    );

    assert_eq!(run.status.code(), Some(1));
    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("id=\"errorMessage\""));
    assert!(page.contains(LOAD_ERROR_MESSAGE));
    assert!(!page.contains("id=\"canslTableBody\""));
}

#[test]
fn test_demo_document_opens_requested_tab() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    log_test_step("Rendering the demo document with the exit tab open");
    let run = run_cli(
        dir.path(),
        &["--source", DEMO_DOCUMENT, "--tab", "exit", "--output", output.to_str().unwrap()],
        &[],
    );

    assert!(run.status.success(), "stderr: {}", String::from_utf8_lossy(&run.stderr));
    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("<div class=\"tab-content active\" id=\"exitTab\">"));
    assert!(!page.contains("<div class=\"tab-content active\" id=\"canslTab\">"));
    assert!(page.contains("<div class=\"card-value\" id=\"canslCount\">2</div>"));
    assert!(page.contains("<div class=\"card-value\" id=\"exitCount\">1</div>"));
}

#[test]
fn test_page_goes_to_stdout_without_output() {
    let dir = tempdir().unwrap();

    let run = run_cli(dir.path(), &["--source", DEMO_DOCUMENT], &[]);

    assert!(run.status.success());
    let page = String::from_utf8(run.stdout).unwrap();
    assert!(page.contains("<div class=\"tab-content active\" id=\"canslTab\">"));
}

#[test]
fn test_invalid_base_url_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    let run = run_cli(
        dir.path(),
        &["--source", DEMO_DOCUMENT, "--output", output.to_str().unwrap()],
        &[("SCREENER_BASE_URL", "not a url")],
    );

    assert!(!run.status.success());
    assert!(String::from_utf8_lossy(&run.stderr).contains("SCREENER_BASE_URL"));
    assert!(!output.exists());
}
