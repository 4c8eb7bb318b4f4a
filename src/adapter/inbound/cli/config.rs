//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: alternates -c {} config validate",
        path.display()
    ));
    output::note(&format!("3. Run: alternates -c {} migrate", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml_or_default(path)?;
    let config = operator::operator().show_config(&config_toml)?;

    if output::result("config", &config) {
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Database", &config.database);

    output::section("Logging");
    output::field("Level", &config.log_level);
    output::field("Format", &config.log_format);

    output::section("Database Pool");
    output::field("Max size", config.pool_max_size);
    output::field("Busy timeout", format!("{}ms", config.busy_timeout_ms));

    output::section("Grouping");
    output::field("Verify", enabled(config.verify_products));
    output::field("Migrate", enabled(config.migrate_on_startup));
    output::field("Mirror", enabled(config.mirror_legacy_links));

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;
    let validation = operator::operator().validate_config(&config_toml)?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    Ok(())
}

fn enabled(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}
