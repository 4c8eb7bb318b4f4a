//! Grouping use-cases for operator-facing adapters.
//!
//! Each call opens the configured store, runs one engine operation, and
//! returns the engine's own result type.

use async_trait::async_trait;

use crate::application::grouping::engine::{ConnectOutcome, DisconnectOutcome, RepairReport};
use crate::application::grouping::migrator::MigrationOutcome;
use crate::domain::alternatives::AlternativesMap;
use crate::domain::cluster::ClusterEntry;
use crate::domain::group::{Group, GroupSummary, NewGroup};
use crate::domain::id::{GroupId, ProductId};
use crate::error::Result;

/// Where and how an operator call runs.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Raw TOML configuration content. Empty means defaults.
    pub config_toml: String,

    /// Override for database file path.
    pub database_path: Option<String>,

    /// Override for log level (e.g., "debug", "warn").
    pub log_level: Option<String>,
}

/// Grouping use-cases for operator-facing adapters.
#[async_trait]
pub trait GroupingOperator: Send + Sync {
    /// Make two products alternatives of each other.
    async fn connect(
        &self,
        session: &Session,
        first: ProductId,
        second: ProductId,
    ) -> Result<ConnectOutcome>;

    /// Take a product out of its group.
    async fn disconnect(&self, session: &Session, product: ProductId) -> Result<DisconnectOutcome>;

    /// Merge group `from` into group `into`. Returns memberships moved.
    async fn merge(&self, session: &Session, into: GroupId, from: GroupId) -> Result<usize>;

    /// Disconnect a product and delete its catalog record.
    async fn remove_product(&self, session: &Session, product: ProductId) -> Result<bool>;

    /// The group of a product, if any.
    async fn product_group(&self, session: &Session, product: ProductId)
        -> Result<Option<GroupId>>;

    /// Alternatives of a product, ascending.
    async fn alternatives(&self, session: &Session, product: ProductId) -> Result<Vec<ProductId>>;

    /// Every group with its members.
    async fn groups(&self, session: &Session) -> Result<Vec<GroupSummary>>;

    /// Replace a group's name and description.
    async fn rename_group(
        &self,
        session: &Session,
        group: GroupId,
        details: NewGroup,
    ) -> Result<Group>;

    /// The full alternatives map.
    async fn alternatives_map(&self, session: &Session) -> Result<AlternativesMap>;

    /// Cluster a product list for display.
    async fn clusters(
        &self,
        session: &Session,
        products: Vec<ProductId>,
    ) -> Result<Vec<ClusterEntry<ProductId>>>;

    /// Rebuild groups from the legacy link table.
    async fn migrate(&self, session: &Session) -> Result<MigrationOutcome>;

    /// Restore group invariants after an interrupted mutation.
    async fn repair(&self, session: &Session) -> Result<RepairReport>;
}
