//! Configuration operator implementation.

use crate::adapter::outbound::sqlite::database::connection::is_memory_url;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            database: config.database,
            log_level: config.logging.level,
            log_format: config.logging.format,
            pool_max_size: config.database_pool.max_size,
            busy_timeout_ms: config.database_pool.busy_timeout_ms,
            verify_products: config.grouping.verify_products,
            migrate_on_startup: config.grouping.migrate_on_startup,
            mirror_legacy_links: config.grouping.mirror_legacy_links,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if is_memory_url(&config.database) {
            warnings.push("In-memory database: groups are lost when the process exits".to_string());
        }
        if !config.grouping.mirror_legacy_links {
            warnings.push(
                "Legacy mirroring disabled: readers of product_alternatives will see stale data"
                    .to_string(),
            );
        }
        if !config.grouping.migrate_on_startup {
            warnings.push("Startup migration disabled: run `alternates migrate` once".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}
