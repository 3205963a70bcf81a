//! Integration tests for the judgeconf binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".judgeconf");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

fn judgeconf(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("judgeconf"));
    cmd.current_dir(project).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A fake interpreter: prints a version banner, otherwise echoes stdin.
#[cfg(unix)]
fn fake_interpreter(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("bin").join("fakepy");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo \"Python 3.12.1\"; exit 0; fi\ncat\n",
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn write_case(root: &Path, problem: &str, case: &str, expected: &str) {
    let dir = root.join(problem).join(case);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("case.yml"),
        format!(
            "executor: python3\ncommand: \"${{python3}} main.py\"\nstdin: \"hello\\n\"\nexpected_output: {:?}\n",
            expected
        ),
    )
    .unwrap();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("judgeconf"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Detect language executors"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("judgeconf"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    judgeconf(temp.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom_executors"));
    Ok(())
}

#[test]
fn cli_completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    judgeconf(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("judgeconf"));
    Ok(())
}

#[test]
fn cli_list_shows_builtin_executors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [python3, text]\n");
    judgeconf(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("python3"))
        .stdout(predicate::str::contains("no autodetection"))
        .stdout(predicate::str::contains("Search path"));
    Ok(())
}

#[test]
fn cli_probe_unsupported_only_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [text]\n");
    judgeconf(temp.path())
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("autodetection not supported"))
        .stdout(predicate::str::contains("runtime: {}"));
    Ok(())
}

#[test]
fn cli_probe_unknown_executor_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [text, cobol]\n");
    judgeconf(temp.path())
        .arg("probe")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not exposed by any executor"))
        .stderr(predicate::str::contains("Run failed (exit status 1)"));
    Ok(())
}

#[test]
fn cli_unknown_only_filter_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [text]\n");
    judgeconf(temp.path())
        .args(["probe", "--only", "fortran"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown executor: fortran"));
    Ok(())
}

#[test]
fn cli_missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    judgeconf(temp.path())
        .args(["--config", "nope.yml", "probe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [gcc, gcc]\n");
    judgeconf(temp.path())
        .arg("probe")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("listed more than once"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_run_passes_with_hinted_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let interpreter = fake_interpreter(temp.path());
    let config = format!(
        "executors: [python3]\noverrides:\n  python3:\n    path: {}\ntests:\n  problem_dirs: [echo]\n",
        interpreter.display()
    );
    fs::create_dir_all(temp.path().join(".judgeconf"))?;
    fs::write(temp.path().join(".judgeconf/config.yml"), config)?;
    write_case(temp.path(), "echo", "basic", "hello\n");

    judgeconf(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("using"))
        .stdout(predicate::str::contains("3.12.1"))
        .stdout(predicate::str::contains("echo/basic"))
        .stdout(predicate::str::contains("Tests: 1 passed, 0 failed, 0 skipped"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_run_fails_on_wrong_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let interpreter = fake_interpreter(temp.path());
    let config = format!(
        "executors: [python3]\noverrides:\n  python3:\n    path: {}\ntests:\n  problem_dirs: [echo]\n",
        interpreter.display()
    );
    fs::create_dir_all(temp.path().join(".judgeconf"))?;
    fs::write(temp.path().join(".judgeconf/config.yml"), config)?;
    write_case(temp.path(), "echo", "basic", "hello\n");
    write_case(temp.path(), "echo", "wrong", "goodbye\n");

    judgeconf(temp.path())
        .arg("run")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("wrong output at line 1"))
        .stdout(predicate::str::contains("Tests: 1 passed, 1 failed, 0 skipped"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_rendered_output_feeds_back_as_hints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let interpreter = fake_interpreter(temp.path());
    let first = format!(
        "executors: [python3]\noverrides:\n  python3:\n    path: {}\n",
        interpreter.display()
    );
    fs::create_dir_all(temp.path().join(".judgeconf"))?;
    fs::write(temp.path().join(".judgeconf/config.yml"), first)?;

    judgeconf(temp.path())
        .args(["probe", "--output", "runtime.yml"])
        .assert()
        .success();
    let rendered = fs::read_to_string(temp.path().join("runtime.yml"))?;
    assert!(rendered.contains("python3:"));
    assert!(rendered.contains("fakepy"));

    // Second run relies on the rendered document alone
    fs::write(
        temp.path().join(".judgeconf/config.yml"),
        "executors: [python3]\n",
    )?;
    judgeconf(temp.path())
        .args(["probe", "--hints", "runtime.yml", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[hinted]"))
        .stdout(predicate::str::contains("\"runtime\""));
    Ok(())
}

#[test]
fn cli_quiet_mode_hides_host_listings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("executors: [text]\n");
    judgeconf(temp.path())
        .args(["--quiet", "probe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search path").not());
    Ok(())
}
