//! Path utilities for alternates.
//!
//! All data lives under `~/.alternates/`:
//! - `~/.alternates/config.toml` - main configuration
//! - `~/.alternates/alternates.db` - group database

use std::path::PathBuf;

/// Returns the alternates home directory (`~/.alternates/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".alternates")
}

/// Returns the default config file path (`~/.alternates/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.alternates/alternates.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("alternates.db")
}

/// Ensures the alternates home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}
