use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devdock() -> Command {
    let mut cmd = Command::cargo_bin("devdock").unwrap();
    cmd.env_remove("DEVDOCK_PROJECTS_ROOT").env_remove("DEVDOCK_PORT");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn shows_help() {
    devdock()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn shows_version() {
    devdock()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    devdock()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn serve_subcommand_help() {
    devdock()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTP API"));
}

#[test]
fn projects_prints_envelope() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("blog/wp-content")).unwrap();
    fs::write(root.path().join("blog/wp-config.php"), "<?php").unwrap();
    fs::create_dir(root.path().join(".cache")).unwrap();

    devdock()
        .args(["projects", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"type\": \"wordpress\""))
        .stdout(predicate::str::contains(".cache").not());
}

#[test]
fn projects_root_from_env() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("api")).unwrap();

    devdock()
        .env("DEVDOCK_PROJECTS_ROOT", root.path())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"url\": \"http://api.localhost\""));
}

#[test]
fn projects_root_from_config_file() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("my_site")).unwrap();

    let config_dir = TempDir::new().unwrap();
    let config = write_config(
        &config_dir,
        &format!("[projects]\nroot = {:?}\n", root.path().to_str().unwrap()),
    );

    devdock()
        .arg("--config")
        .arg(&config)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"displayName\": \"My Site\""));
}

#[test]
fn projects_missing_root_fails() {
    let root = TempDir::new().unwrap();

    devdock()
        .args(["projects", "--root"])
        .arg(root.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Projects directory not found"));
}

#[test]
fn health_reports_every_service() {
    devdock()
        .args(["health", "--host", "127.0.0.1", "--timeout-ms", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timestamp\""))
        .stdout(predicate::str::contains("\"adminer\""))
        .stdout(predicate::str::contains("\"meilisearch\""));
}

#[test]
fn health_rejects_zero_timeout() {
    devdock()
        .args(["health", "--timeout-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn invalid_config_path_fails() {
    devdock()
        .args(["--config", "/nonexistent/path.toml", "projects"])
        .assert()
        .failure();
}

#[test]
fn completions_ignore_broken_config() {
    devdock()
        .args(["--config", "/nonexistent/path.toml", "completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devdock"));
}

#[test]
fn completions_are_generated() {
    devdock()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devdock"));
}
