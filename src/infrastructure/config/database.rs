//! Database pool configuration.

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::PoolOptions;

/// SQLite connection pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabasePoolConfig {
    /// Maximum pooled connections. In-memory databases always use one.
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Lock wait before a write fails (milliseconds).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_max_size() -> u32 {
    5
}

fn default_busy_timeout_ms() -> u64 {
    5000 // 5 seconds
}

impl Default for DatabasePoolConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabasePoolConfig {
    /// Convert to the adapter's pool options.
    #[must_use]
    pub fn to_pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.max_size,
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}
