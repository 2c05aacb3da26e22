//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn repairlog() -> Command {
    let mut cmd = Command::cargo_bin("repairlog").unwrap();
    for var in [
        "REPAIRLOG_CONFIG",
        "REPAIRLOG_DATABASE",
        "REPAIRLOG_BIND",
        "REPAIRLOG_STATIC_DIR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// === Help ===

#[test]
fn test_help_lists_commands() {
    repairlog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    repairlog()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

// === Store ===

#[test]
fn test_init_db_creates_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("shop").join("computers.db");

    repairlog()
        .arg("init-db")
        .arg("--database")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created store"));
    assert!(db.exists());

    repairlog()
        .arg("init-db")
        .arg("--database")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 computers)"));
}

// === Config ===

#[test]
fn test_config_path_honours_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");

    repairlog()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_show_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[server]\nbind = \"0.0.0.0:8080\"\n\n[database]\npath = \"/srv/computers.db\"\n",
    )
    .unwrap();

    repairlog()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("/srv/computers.db"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\n").unwrap();

    repairlog()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));
}

#[test]
fn test_completions_bash() {
    repairlog()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("repairlog"));
}
