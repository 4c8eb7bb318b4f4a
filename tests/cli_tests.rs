//! CLI integration tests against a temporary database.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn database(&self) -> PathBuf {
        self.path("alternates.db")
    }

    /// Command pointed at this workspace's database and an absent config.
    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("alternates");
        cmd.arg("--config")
            .arg(self.path("absent.toml"))
            .arg("--database")
            .arg(self.database());
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .arg("--json")
            .args(args)
            .output()
            .expect("run alternates");
        assert!(
            output.status.success(),
            "alternates {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().last().expect("one json line");
        serde_json::from_str(line).expect("valid json line")
    }
}

fn write_config(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write config");
}

#[test]
fn help_lists_grouping_commands() {
    cargo_bin_cmd!("alternates")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("connect"))
        .stdout(predicate::str::contains("disconnect"))
        .stdout(predicate::str::contains("clusters"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn version_names_the_binary() {
    cargo_bin_cmd!("alternates")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("alternates"));
}

#[test]
fn connect_then_list_groups() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["connect", "10", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created group"));
    ws.cmd().args(["connect", "20", "30"]).assert().success();

    ws.cmd()
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("10, 20, 30"));
}

#[test]
fn json_output_carries_typed_payloads() {
    let ws = Workspace::new();

    let created = ws.json(&["connect", "1", "2"]);
    assert_eq!(created["type"], "connect");
    assert_eq!(created["payload"]["outcome"], "created");

    let joined = ws.json(&["connect", "2", "3"]);
    assert_eq!(joined["payload"]["outcome"], "joined");
    assert_eq!(joined["payload"]["product"], 3);

    let alternatives = ws.json(&["alternatives", "3"]);
    assert_eq!(alternatives["payload"]["alternatives"], serde_json::json!([1, 2]));

    let map = ws.json(&["map"]);
    assert_eq!(map["payload"]["1"], serde_json::json!([2, 3]));
}

#[test]
fn disconnect_dissolves_a_pair() {
    let ws = Workspace::new();
    ws.json(&["connect", "10", "20"]);

    let outcome = ws.json(&["disconnect", "10"]);
    assert_eq!(outcome["payload"]["outcome"], "dissolved");
    assert_eq!(outcome["payload"]["released"], serde_json::json!([20]));

    let group = ws.json(&["group", "20"]);
    assert!(group["payload"]["group"].is_null());
}

#[test]
fn clusters_follow_input_order() {
    let ws = Workspace::new();
    ws.json(&["connect", "1", "3"]);

    let clusters = ws.json(&["clusters", "3", "2", "1"]);
    let entries = clusters["payload"].as_array().expect("entry list");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["kind"], "cluster");
    assert_eq!(entries[0]["primary"], 3);
    assert_eq!(entries[0]["alternatives"], serde_json::json!([1]));
    assert_eq!(entries[1]["kind"], "single");
    assert_eq!(entries[1]["item"], 2);
}

#[test]
fn merge_of_unknown_group_fails() {
    let ws = Workspace::new();
    ws.json(&["connect", "1", "2"]);

    ws.cmd()
        .args(["merge", "1", "999"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("999"));
}

#[test]
fn self_connect_is_rejected() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["connect", "4", "4"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn migrate_reports_already_migrated_after_startup() {
    let ws = Workspace::new();
    ws.json(&["connect", "1", "2"]);

    let outcome = ws.json(&["migrate"]);
    assert_eq!(outcome["payload"]["status"], "already_migrated");
}

#[test]
fn repair_on_clean_store_is_clean() {
    let ws = Workspace::new();
    let report = ws.json(&["repair"]);
    assert_eq!(report["payload"]["dangling_memberships"], 0);
    assert_eq!(report["payload"]["groups_dissolved"], 0);
}

#[test]
fn config_validate_rejects_bad_values() {
    let ws = Workspace::new();
    let config = ws.path("config.toml");
    write_config(&config, "[database_pool]\nmax_size = 0\n");

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("max_size"));
}

#[test]
fn config_validate_points_at_syntax_errors() {
    let ws = Workspace::new();
    let config = ws.path("config.toml");
    write_config(&config, "database = \n");

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn config_init_then_validate() {
    let ws = Workspace::new();
    let config = ws.path("nested/config.toml");

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure();
}

#[test]
fn config_show_without_file_uses_defaults() {
    let ws = Workspace::new();
    let output = cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(ws.path("absent.toml"))
        .args(["--json", "config", "show"])
        .output()
        .expect("run alternates");

    assert!(output.status.success());
    let line: Value = serde_json::from_slice(&output.stdout).expect("json line");
    assert_eq!(line["type"], "config");
    assert_eq!(line["payload"]["database"], "alternates.db");
}

#[test]
fn database_flag_overrides_config_file() {
    let ws = Workspace::new();
    let config = ws.path("config.toml");
    write_config(
        &config,
        &format!("database = \"{}\"\n", ws.path("ignored.db").display()),
    );

    cargo_bin_cmd!("alternates")
        .arg("--config")
        .arg(&config)
        .arg("--database")
        .arg(ws.database())
        .args(["connect", "1", "2"])
        .assert()
        .success();

    assert!(ws.database().exists());
    assert!(!ws.path("ignored.db").exists());
}
