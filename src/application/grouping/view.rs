//! Catalog rendering: alternatives map plus cluster derivation.

use crate::domain::cluster::{build_clusters, CatalogItem, ClusterEntry};
use crate::error::Result;
use crate::port::outbound::catalog::ProductCatalog;
use crate::port::outbound::store::GroupRepository;

use super::engine::GroupingEngine;

impl<R: GroupRepository, C: ProductCatalog> GroupingEngine<R, C> {
    /// Cluster a caller-filtered catalog slice by current group membership.
    ///
    /// Reads the alternatives map once, then runs the pure cluster builder
    /// over `items` in their given order.
    pub async fn cluster_view<P>(&self, items: Vec<P>) -> Result<Vec<ClusterEntry<P>>>
    where
        P: CatalogItem + Send,
    {
        let alternatives = self.get_all_alternatives_map().await?;
        Ok(build_clusters(items, &alternatives))
    }
}
