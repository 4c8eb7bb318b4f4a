//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::error::Result;

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub database: String,
    pub log_level: String,
    pub log_format: String,
    pub pool_max_size: u32,
    pub busy_timeout_ms: u64,
    pub verify_products: bool,
    pub migrate_on_startup: bool,
    pub mirror_legacy_links: bool,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
