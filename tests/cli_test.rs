//! Integration tests for the CLI surface.
//!
//! Only paths that never reach the installer are exercised here; the full
//! pipeline is covered with stubbed side effects in `bootstrap_test.rs`.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bootstrap new application projects"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_create_help_documents_package_version_forms() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.args(["create", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--package-version"))
        .stdout(predicate::str::contains("file:../my-custom-scripts"));
    Ok(())
}

#[test]
fn cli_create_requires_directory() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("create");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_create_rejects_invalid_project_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.current_dir(temp.path());
    cmd.args(["create", "My App"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot create a project named"));
    assert!(!temp.path().join("My App").exists());
    Ok(())
}

#[test]
fn cli_create_rejects_reserved_dependency_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.current_dir(temp.path());
    cmd.args(["create", "react"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("dependency with the same name"));
    Ok(())
}

#[test]
fn cli_create_aborts_on_conflicting_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let target = temp.path().join("my-app");
    fs::create_dir(&target)?;
    fs::write(target.join("index.js"), "console.log('hi')")?;

    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.current_dir(temp.path());
    cmd.args(["create", "my-app"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("index.js"));

    // The conflicting file was left untouched and nothing was scaffolded.
    assert!(target.join("index.js").exists());
    assert!(!target.join("package.json").exists());
    Ok(())
}

#[test]
fn cli_info_prints_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("info");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("groundwork"))
        .stdout(predicate::str::contains("OS:"))
        .stdout(predicate::str::contains("groundwork-scripts"));
    Ok(())
}

#[test]
fn cli_completions_emit_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("groundwork"));
    Ok(())
}
