//! Infrastructure bootstrap helpers for engine wiring.
//!
//! Opening the store applies pending schema migrations. Starting it also
//! runs the legacy-link migrator when enabled; a failed migration is
//! returned and nothing is served from a half-built membership store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::adapter::outbound::sqlite::catalog::SqliteProductCatalog;
use crate::adapter::outbound::sqlite::database::connection::{create_pool_with, run_migrations};
use crate::adapter::outbound::sqlite::legacy::SqliteLegacyLinkStore;
use crate::adapter::outbound::sqlite::store::SqliteGroupRepository;
use crate::application::grouping::engine::GroupingEngine;
use crate::application::grouping::migrator::{LegacyMigrator, MigrationOutcome};
use crate::application::grouping::mirror::LegacyMirror;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Grouping engine over the SQLite stores.
pub type SqliteGroupingEngine = GroupingEngine<SqliteGroupRepository, SqliteProductCatalog>;

/// Mirroring facade over [`SqliteGroupingEngine`].
pub type SqliteLegacyMirror =
    LegacyMirror<SqliteGroupRepository, SqliteProductCatalog, SqliteLegacyLinkStore>;

/// Wired services for one configured database.
pub struct GroupingServices {
    /// Write path, mirroring into the legacy table when configured.
    pub mirror: SqliteLegacyMirror,
    /// Legacy-link migrator over the same stores.
    pub migrator: LegacyMigrator<SqliteGroupRepository, SqliteLegacyLinkStore>,
    /// Catalog handle, for seeding and removal.
    pub catalog: Arc<SqliteProductCatalog>,
}

impl GroupingServices {
    /// Read path.
    #[must_use]
    pub fn engine(&self) -> &SqliteGroupingEngine {
        self.mirror.engine()
    }
}

/// Open the database, apply schema migrations, and wire the services.
///
/// # Errors
/// Returns an error if the pool cannot be created or migrations fail.
pub fn open(config: &Config) -> Result<GroupingServices> {
    let pool = create_pool_with(&config.database, config.database_pool.to_pool_options())?;
    run_migrations(&pool)?;
    debug!(database = %config.database, "Database ready");

    let repository = Arc::new(SqliteGroupRepository::new(pool.clone()));
    let catalog = Arc::new(SqliteProductCatalog::new(pool.clone()));
    let links = Arc::new(SqliteLegacyLinkStore::new(pool));

    let engine = GroupingEngine::with_catalog(
        Arc::clone(&repository),
        Arc::clone(&catalog),
        config.grouping.policy(),
    );
    let mirror = if config.grouping.mirror_legacy_links {
        LegacyMirror::new(engine, Arc::clone(&links))
    } else {
        LegacyMirror::passthrough(engine)
    };

    Ok(GroupingServices {
        mirror,
        migrator: LegacyMigrator::new(repository, links),
        catalog,
    })
}

/// Open the database and run the startup migration when enabled.
///
/// # Errors
/// Returns an error if opening fails or the legacy migration fails.
pub async fn start(config: &Config) -> Result<GroupingServices> {
    let services = open(config)?;

    if config.grouping.migrate_on_startup {
        match services.migrator.run().await? {
            MigrationOutcome::Migrated(report) => {
                info!(groups = report.groups_created, "Startup migration complete");
            }
            MigrationOutcome::AlreadyMigrated => {
                debug!("Startup migration not needed");
            }
        }
    }

    Ok(services)
}
