use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn scribe() -> Command {
    Command::new(cargo::cargo_bin!("scribe"))
}

/// A temp dir holding a config that points at a SQLite file inside it.
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config = serde_json::json!({
        "databaseUrl": format!("sqlite://{}?mode=rwc", dir.path().join("it.db").display()),
        "mediaDir": dir.path().join("media"),
    });
    fs::write(dir.path().join("scribe.json"), config.to_string()).unwrap();
    dir
}

#[test]
fn test_help_lists_commands() {
    scribe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_no_command_is_usage_error() {
    scribe().assert().failure().code(2);
}

#[test]
fn test_sql_for_postgres() {
    scribe()
        .args(["sql", "--backend", "postgres"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS \"posts\""))
        .stdout(predicate::str::contains("ON DELETE SET NULL"));
}

#[test]
fn test_sql_for_mysql_uses_backticks() {
    scribe()
        .args(["sql", "--backend", "mysql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`follows`"));
}

#[test]
fn test_schema_prints_camel_case_keys() {
    scribe()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("databaseUrl"))
        .stdout(predicate::str::contains("viewerHeader"));
}

#[test]
fn test_init_refuses_second_run() {
    let dir = tempfile::tempdir().unwrap();

    scribe().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("scribe.json").exists());

    scribe()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_user_and_group_management() {
    let dir = project();
    let run = |args: &[&str]| {
        let mut cmd = scribe();
        cmd.current_dir(dir.path()).args(args);
        cmd
    };

    run(&["migrate"]).assert().success();
    run(&["user", "add", "alice", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
    run(&["user", "add", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    run(&["group", "add", "cats", "--title", "Cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/group/cats/"));
    run(&["group", "remove", "cats"]).assert().success();
    run(&["user", "remove", "alice"]).assert().success();
    run(&["user", "remove", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
