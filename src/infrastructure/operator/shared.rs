//! Shared helper routines for operator implementations.

use crate::error::Result;
use crate::infrastructure::bootstrap::{self, GroupingServices};
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::grouping::Session;

/// Resolve the effective configuration for a session.
pub(super) fn session_config(session: &Session) -> Result<Config> {
    let mut config = Config::parse_toml(&session.config_toml)?;
    if let Some(path) = &session.database_path {
        config.database.clone_from(path);
    }
    if let Some(level) = &session.log_level {
        config.logging.level.clone_from(level);
    }
    config.validate()?;
    Ok(config)
}

/// Configure logging and start the services for a session.
pub(super) async fn start_services(session: &Session) -> Result<GroupingServices> {
    let config = session_config(session)?;
    config.init_logging();
    bootstrap::start(&config).await
}

/// Configure logging and open the services without the startup migration.
pub(super) fn open_services(session: &Session) -> Result<GroupingServices> {
    let config = session_config(session)?;
    config.init_logging();
    bootstrap::open(&config)
}
