//! Inbound operator accessor for CLI handlers.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;
use crate::port::inbound::operator::grouping::Session;
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Load config TOML, treating a missing file as an empty configuration.
pub fn read_config_toml_or_default(path: &Path) -> Result<String> {
    if path.exists() {
        read_config_toml(path)
    } else {
        Ok(String::new())
    }
}

/// Build the session every grouping command runs in.
pub fn session(
    config_path: &Path,
    database: Option<&Path>,
    log_level: Option<&str>,
) -> Result<Session> {
    Ok(Session {
        config_toml: read_config_toml_or_default(config_path)?,
        database_path: database.map(|path| path.to_string_lossy().into_owned()),
        log_level: log_level.map(str::to_string),
    })
}
