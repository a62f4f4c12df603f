use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FRONTEND: &str = "# Frontend rules\n- Use function components\n- Style with Tailwind";
const BACKEND: &str = "# Backend rules\n- Follow RESTful design\n- Use one error format";
const COMMON: &str = "# Common rules\n- Code review is mandatory";

fn rules_dir() -> TempDir {
    let temp = tempfile::tempdir().expect("create rules dir");
    fs::write(temp.path().join("frontend.md"), FRONTEND).expect("write frontend");
    fs::write(temp.path().join("backend.md"), BACKEND).expect("write backend");
    fs::write(temp.path().join("common.md"), COMMON).expect("write common");
    temp
}

fn rules_cmd(rules: &Path, work: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rules").expect("binary exists");
    cmd.env("RULES_PATH", rules)
        .env("NO_COLOR", "1")
        .current_dir(work);
    cmd
}

#[test]
fn help_displays_usage() {
    Command::cargo_bin("rules")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("RULES_PATH"));
}

#[test]
fn combines_all_rule_files() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .arg("cline")
        .assert()
        .success()
        .stdout(predicate::str::contains(".clinerules"))
        .stdout(predicate::str::contains("Files combined: 3"));

    let written = fs::read_to_string(work.path().join(".clinerules")).unwrap();
    let expected = format!("{BACKEND}\n\n{COMMON}\n\n{FRONTEND}\n\n");
    assert_eq!(written, expected);
}

#[test]
fn combines_named_rule_files_in_order() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .args(["cursor", "frontend", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".cursorrules"));

    let written = fs::read_to_string(work.path().join(".cursorrules")).unwrap();
    assert_eq!(written, format!("{FRONTEND}\n\n{BACKEND}\n\n"));
    assert!(!written.contains("Common rules"));
}

#[test]
fn without_editor_writes_generic_rules_file() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path()).assert().success();

    assert!(work.path().join(".rules").exists());
}

#[test]
fn partial_match_warns_and_succeeds() {
    let rules = tempfile::tempdir().unwrap();
    fs::write(rules.path().join("frontend.md"), FRONTEND).unwrap();
    fs::write(rules.path().join("common.md"), COMMON).unwrap();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .args(["cline", "frontend", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend.md"));

    let written = fs::read_to_string(work.path().join(".clinerules")).unwrap();
    assert_eq!(written, format!("{FRONTEND}\n\n"));
}

#[test]
fn total_miss_fails_with_exit_code_one() {
    let rules = tempfile::tempdir().unwrap();
    fs::write(rules.path().join("frontend.md"), FRONTEND).unwrap();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .args(["cline", "backend"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("backend.md"));

    assert!(!work.path().join(".clinerules").exists());
}

#[test]
fn missing_rules_path_fails_without_writing() {
    let work = tempfile::tempdir().unwrap();

    Command::cargo_bin("rules")
        .unwrap()
        .env_remove("RULES_PATH")
        .current_dir(work.path())
        .arg("cline")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("RULES_PATH"))
        .stdout(predicate::str::contains("Usage"));

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn empty_rules_path_fails() {
    let work = tempfile::tempdir().unwrap();

    Command::cargo_bin("rules")
        .unwrap()
        .env("RULES_PATH", "")
        .current_dir(work.path())
        .assert()
        .code(1);

    assert!(!work.path().join(".rules").exists());
}

#[test]
fn editor_with_path_separator_is_rejected() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .arg("../outside")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Argument"));
}

#[test]
fn unknown_flag_exits_with_one() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .arg("--no-such-flag")
        .assert()
        .code(1);
}

#[test]
fn list_prints_rules_path_and_file_names() {
    let rules = rules_dir();
    fs::write(rules.path().join("notes.txt"), "not a rule").unwrap();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains(rules.path().display().to_string()))
        .stdout(predicate::str::contains("backend.md"))
        .stdout(predicate::str::contains("common.md"))
        .stdout(predicate::str::contains("frontend.md"))
        .stdout(predicate::str::contains("notes.txt").not());

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn list_fails_when_rules_path_does_not_exist() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("no-such-rules");

    rules_cmd(&missing, work.path())
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("*.md"));
}

#[test]
fn list_fails_when_no_rule_files_exist() {
    let rules = tempfile::tempdir().unwrap();
    fs::write(rules.path().join("notes.txt"), "not a rule").unwrap();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .args(["-q", "-l"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Available").not());
}

#[test]
fn list_as_json() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    let output = rules_cmd(rules.path(), work.path())
        .args(["--list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        listing["rules"],
        serde_json::json!(["backend.md", "common.md", "frontend.md"])
    );
    assert_eq!(
        listing["rulesPath"],
        serde_json::json!(rules.path().display().to_string())
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();
    let target = work.path().join(".clinerules");

    rules_cmd(rules.path(), work.path())
        .arg("cline")
        .assert()
        .success();
    let first = fs::read(&target).unwrap();

    rules_cmd(rules.path(), work.path())
        .arg("cline")
        .assert()
        .success();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn quiet_suppresses_success_output() {
    let rules = rules_dir();
    let work = tempfile::tempdir().unwrap();

    rules_cmd(rules.path(), work.path())
        .args(["-q", "cline", "frontend", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
