use std::fs;

use alternates::error::{ConfigError, Error};
use alternates::infrastructure::config::settings::Config;

#[test]
fn load_reads_every_section() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
database = "catalog.db"

[logging]
level = "debug"
format = "json"

[database_pool]
max_size = 3
busy_timeout_ms = 1000

[grouping]
verify_products = true
migrate_on_startup = false
mirror_legacy_links = false
"#,
    )
    .expect("write config");

    let config = Config::load(&path).expect("load config");

    assert_eq!(config.database, "catalog.db");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.database_pool.max_size, 3);
    assert_eq!(config.database_pool.busy_timeout_ms, 1000);
    assert!(config.grouping.verify_products);
    assert!(!config.grouping.migrate_on_startup);
    assert!(!config.grouping.mirror_legacy_links);
}

#[test]
fn load_of_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn invalid_log_level_is_rejected() {
    let result = Config::parse_toml("[logging]\nlevel = \"alternates=loud\"\n");

    match result {
        Err(Error::Config(ConfigError::InvalidValue { field: "level", .. })) => {}
        Err(err) => panic!("expected invalid level error, got {err}"),
        Ok(_) => panic!("expected invalid level error"),
    }
}

#[test]
fn unknown_keys_are_ignored() {
    let config = Config::parse_toml("database = \"x.db\"\nlegacy_option = 1\n").expect("parse");
    assert_eq!(config.database, "x.db");
}

#[test]
fn template_parses_to_defaults() {
    let template = include_str!("../config.toml.example");
    let config = Config::parse_toml(template).expect("template parses");
    let defaults = Config::default();

    assert_eq!(config.database, defaults.database);
    assert_eq!(config.database_pool.max_size, defaults.database_pool.max_size);
    assert_eq!(
        config.grouping.migrate_on_startup,
        defaults.grouping.migrate_on_startup
    );
}
