//! Command-line interface definitions.
//!
//! Defines the CLI structure for the alternates application using `clap`.
//! Subcommands cover the grouping operations, the legacy migration, store
//! repair, and configuration management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Manage groups of substitutable catalog products
#[derive(Parser, Debug)]
#[command(name = "alternates")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Path to the SQLite database (overrides the config file)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level implied by `-q`/`-v`, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        match (self.quiet, self.verbose) {
            (true, _) => Some("error"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        }
    }
}

/// Top-level subcommands for the alternates CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make two products alternatives of each other
    Connect(ConnectArgs),

    /// Take a product out of its group
    Disconnect(ProductArg),

    /// Merge one group into another
    Merge(MergeArgs),

    /// Disconnect a product and delete its catalog record
    RemoveProduct(ProductArg),

    /// Show the group of a product
    Group(ProductArg),

    /// List the alternatives of a product
    Alternatives(ProductArg),

    /// List every group with its members
    Groups,

    /// Set a group's name and description
    Rename(RenameArgs),

    /// Print the full alternatives map
    Map,

    /// Cluster a product list for display
    Clusters(ClustersArgs),

    /// Rebuild groups from the legacy alternatives table
    Migrate,

    /// Restore group invariants after an interrupted update
    Repair,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `alternates config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `connect`.
#[derive(Parser, Debug)]
pub struct ConnectArgs {
    /// Product whose group survives a merge.
    pub first: i64,
    /// Product to connect to `first`.
    pub second: i64,
}

/// Shared argument struct for commands that take a single product id.
#[derive(Parser, Debug)]
pub struct ProductArg {
    /// Product id.
    pub product: i64,
}

/// Arguments for `merge`.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Group that receives the members.
    pub into: i64,
    /// Group that is emptied and deleted.
    pub from: i64,
}

/// Arguments for `rename`.
#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Group id.
    pub group: i64,

    /// New display name. Omit to clear.
    #[arg(long)]
    pub name: Option<String>,

    /// New description. Omit to clear.
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `clusters`.
#[derive(Parser, Debug)]
pub struct ClustersArgs {
    /// Product ids in display order.
    #[arg(required = true)]
    pub products: Vec<i64>,
}
