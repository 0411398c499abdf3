//! Argument-parsing tests for the deploy-policy binary. No network calls.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("deploy-policy").expect("binary should build");
    // Make the tests deterministic regardless of the developer's shell.
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("GITHUB_OWNER");
    cmd.env_remove("GITHUB_BASE_URL");
    cmd
}

#[test]
fn test_help_lists_lifecycle_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("read"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("import")),
        );
}

#[test]
fn test_missing_credentials_is_an_argument_error() {
    cmd()
        .arg("read")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--github-token"));
}

#[test]
fn test_create_requires_all_three_fields() {
    cmd()
        .args([
            "--github-token",
            "t",
            "--github-owner",
            "acme",
            "create",
            "--repository",
            "r1",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("--environment")
                .and(predicate::str::contains("--branch-pattern")),
        );
}

#[test]
fn test_import_requires_an_id() {
    cmd()
        .args(["--github-token", "t", "--github-owner", "acme", "import"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}
