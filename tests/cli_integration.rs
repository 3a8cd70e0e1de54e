//! CLI integration tests for ctext.
//!
//! These tests run the binary in a scratch directory with its own HOME so
//! no user configuration leaks in.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the ctext binary command, isolated in `dir`.
fn ctext(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ctext").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("USERPROFILE", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_project_config(dir: &TempDir, contents: &str) {
    let config_dir = dir.path().join(".ctext");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
}

// ============================================================================
// ctext describe
// ============================================================================

#[test]
fn test_describe_default_package() {
    let tmp = temp_dir();

    ctext(&tmp)
        .arg("describe")
        .assert()
        .success()
        .stdout(predicate::str::contains("package  ctext"))
        .stdout(predicate::str::contains("path     github.com/jurgen-kluft/ctext"))
        .stdout(predicate::str::contains(
            "ctext_test -> [cunittest, ccore, cbase, ctext]",
        ));
}

#[test]
fn test_describe_json_without_core() {
    let tmp = temp_dir();

    let output = ctext(&tmp)
        .args(["describe", "--json", "--no-core"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["main_lib"]["name"], "ctext");
    assert_eq!(value["main_lib"]["dependencies"], serde_json::json!(["cbase"]));
    assert_eq!(value["unittest"]["name"], "ctext_test");
    assert_eq!(
        value["unittest"]["dependencies"],
        serde_json::json!(["cunittest", "cbase", "ctext"])
    );
}

#[test]
fn test_describe_uses_project_config() {
    let tmp = temp_dir();
    write_project_config(
        &tmp,
        r#"
[package]
name = "xtext"
include_core = false
base = ["xbase"]
test_harness = "xunittest"
"#,
    );

    ctext(&tmp)
        .arg("describe")
        .assert()
        .success()
        .stdout(predicate::str::contains("xtext_test -> [xunittest, xbase, xtext]"));
}

#[test]
fn test_describe_declared_upstream() {
    let tmp = temp_dir();
    write_project_config(
        &tmp,
        r#"
[package]
base = ["cbase", "cjson"]

[upstream.cjson]
deps = ["cbase"]
"#,
    );

    ctext(&tmp)
        .args(["describe", "--no-core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ctext -> [cbase, cjson]"));
}

#[test]
fn test_describe_missing_upstream_fails() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["describe", "--base", "cmissing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not resolve upstream package `cmissing`"))
        .stderr(predicate::str::contains("required by `ctext`"));
}

#[test]
fn test_describe_verbose_lists_upstream_paths() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["--verbose", "describe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccore (github.com/jurgen-kluft/ccore)"));
}

#[test]
fn test_describe_parent_dir_name_fails() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["describe", "--name", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package name `..`"));
}

#[test]
fn test_generate_rejects_unsafe_name() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["generate", "--name", "a;b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package name"));

    assert!(!tmp.path().join(".ctext/generated").exists());
}

#[test]
fn test_no_color_diagnostic_is_plain() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["--no-color", "describe", "--base", "cmissing"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: could not resolve"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_describe_empty_name_fails() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["describe", "--name", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package name"));
}

#[test]
fn test_describe_bad_explicit_config_fails() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["describe", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// ============================================================================
// ctext generate
// ============================================================================

#[test]
fn test_generate_cmake_default() {
    let tmp = temp_dir();

    ctext(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("CMakeLists.txt"));

    let cmake = fs::read_to_string(tmp.path().join(".ctext/generated/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(ctext LANGUAGES CXX)"));
    assert!(cmake.contains("add_test(NAME ctext_test COMMAND ctext_test)"));
}

#[test]
fn test_generate_all_to_output_dir() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["generate", "--format", "all", "--output", "build", "--no-base"])
        .assert()
        .success();

    let json = fs::read_to_string(tmp.path().join("build/ctext.package.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["main_lib"]["dependencies"], serde_json::json!(["ccore"]));

    assert!(tmp.path().join("build/CMakeLists.txt").exists());
}

#[test]
fn test_generate_rejects_unknown_format() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["generate", "--format", "ninja"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_generate_failure_writes_nothing() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["generate", "--base", "cmissing"])
        .assert()
        .failure();

    assert!(!tmp.path().join(".ctext/generated").exists());
}

// ============================================================================
// ctext tree
// ============================================================================

#[test]
fn test_tree() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["tree", "--no-core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ctext (github.com/jurgen-kluft/ctext)"))
        .stdout(predicate::str::contains("└── ctext_test [test]"))
        .stdout(predicate::str::contains("ctext [lib] (*)"));
}

// ============================================================================
// ctext completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    ctext(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ctext"));
}
