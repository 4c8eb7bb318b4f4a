//! Command dispatch for the CLI entry point.

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{config, grouping, operator};
use crate::error::Result;

/// Apply global flags and run the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config::execute_init(&cli.config, args.force),
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let session = operator::session(&cli.config, cli.database.as_deref(), cli.log_level())?;

    match cli.command {
        Commands::Connect(args) => grouping::execute_connect(&session, &args).await,
        Commands::Disconnect(args) => grouping::execute_disconnect(&session, &args).await,
        Commands::Merge(args) => grouping::execute_merge(&session, &args).await,
        Commands::RemoveProduct(args) => grouping::execute_remove_product(&session, &args).await,
        Commands::Group(args) => grouping::execute_group(&session, &args).await,
        Commands::Alternatives(args) => grouping::execute_alternatives(&session, &args).await,
        Commands::Groups => grouping::execute_groups(&session).await,
        Commands::Rename(args) => grouping::execute_rename(&session, args).await,
        Commands::Map => grouping::execute_map(&session).await,
        Commands::Clusters(args) => grouping::execute_clusters(&session, &args).await,
        Commands::Migrate => grouping::execute_migrate(&session).await,
        Commands::Repair => grouping::execute_repair(&session).await,
        Commands::Config(_) => Ok(()),
    }
}
