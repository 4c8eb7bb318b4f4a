//! One-shot rebuild of groups from legacy pairwise links.
//!
//! The legacy table is read as an undirected graph; each connected component
//! of two or more products becomes one group. The run is guarded by a
//! completion marker written with the groups. A store populated before the
//! marker existed is marked on first check.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::component::Adjacency;
use crate::domain::group::{NewGroup, MIN_GROUP_MEMBERS};
use crate::error::Result;
use crate::port::outbound::legacy::LegacyLinkStore;
use crate::port::outbound::store::{GroupRepository, GroupTransaction};

/// Counts reported by a migration that ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Groups created, one per component of two or more products.
    pub groups_created: usize,
    /// Membership rows inserted.
    pub products_grouped: usize,
    /// Legacy rows read.
    pub links_consumed: usize,
    /// Distinct undirected edges after deduplication.
    pub distinct_edges: usize,
    /// Single-product components left ungrouped (malformed self links).
    pub skipped_components: usize,
}

/// Outcome of [`LegacyMigrator::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// Groups were rebuilt from the legacy table.
    Migrated(MigrationReport),
    /// The migration was recorded earlier, or the membership store already
    /// had rows; nothing was done.
    AlreadyMigrated,
}

/// Rebuilds the membership store from the legacy link table.
pub struct LegacyMigrator<R, L> {
    repository: Arc<R>,
    links: Arc<L>,
}

impl<R: GroupRepository, L: LegacyLinkStore> LegacyMigrator<R, L> {
    pub fn new(repository: Arc<R>, links: Arc<L>) -> Self {
        Self { repository, links }
    }

    /// Run the migration.
    ///
    /// All groups are written in one unit of work, so a storage failure
    /// leaves the membership store empty and the run can be retried. The
    /// legacy table is never modified.
    pub async fn run(&self) -> Result<MigrationOutcome> {
        let already_migrated = self
            .repository
            .atomically(|tx| already_migrated_in(tx))
            .await?;
        if already_migrated {
            info!("Legacy migration already recorded, skipping");
            return Ok(MigrationOutcome::AlreadyMigrated);
        }

        let links = self.links.load_all().await?;
        let links_consumed = links.len();
        let adjacency = Adjacency::from_edges(
            links
                .iter()
                .map(|link| (link.product_id, link.alternative_product_id)),
        );
        let distinct_edges = adjacency.edge_count();
        let components = adjacency.components();

        let outcome = self
            .repository
            .atomically(move |tx| {
                // The first check ran in a separate unit of work.
                if already_migrated_in(tx)? {
                    return Ok(MigrationOutcome::AlreadyMigrated);
                }

                let mut report = MigrationReport {
                    links_consumed,
                    distinct_edges,
                    ..MigrationReport::default()
                };
                for component in components {
                    if component.len() < MIN_GROUP_MEMBERS {
                        report.skipped_components += 1;
                        continue;
                    }
                    let group = tx.create_group(&NewGroup::default())?;
                    for &product in &component {
                        tx.add_member(product, group)?;
                    }
                    report.groups_created += 1;
                    report.products_grouped += component.len();
                }
                tx.record_legacy_migration()?;
                Ok(MigrationOutcome::Migrated(report))
            })
            .await?;

        match &outcome {
            MigrationOutcome::Migrated(report) => {
                if report.skipped_components > 0 {
                    warn!(
                        skipped = report.skipped_components,
                        "Legacy links contained self references"
                    );
                }
                info!(
                    groups = report.groups_created,
                    products = report.products_grouped,
                    links = report.links_consumed,
                    "Migrated legacy alternative links"
                );
            }
            MigrationOutcome::AlreadyMigrated => {
                info!("Legacy migration completed concurrently, skipping");
            }
        }

        Ok(outcome)
    }
}

fn already_migrated_in(tx: &mut dyn GroupTransaction) -> Result<bool> {
    if tx.legacy_migration_recorded()? {
        return Ok(true);
    }
    if tx.membership_count()? > 0 {
        tx.record_legacy_migration()?;
        return Ok(true);
    }
    Ok(false)
}
