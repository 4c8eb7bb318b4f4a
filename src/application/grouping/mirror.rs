//! Dual-write facade for the legacy link table.
//!
//! While older clients still read the pairwise table, every grouping
//! mutation is mirrored into it. The mirror is best effort: the group store
//! is the source of truth, and a failed legacy write is logged, never
//! returned. Dropping this module removes dual writes without touching the
//! engine.

use std::sync::Arc;

use tracing::warn;

use super::engine::{ConnectOutcome, DisconnectOutcome, GroupingEngine};
use crate::domain::id::{GroupId, ProductId};
use crate::error::Result;
use crate::port::outbound::catalog::ProductCatalog;
use crate::port::outbound::legacy::LegacyLinkStore;
use crate::port::outbound::store::GroupRepository;

/// Grouping engine wrapper that mirrors writes into the legacy table.
pub struct LegacyMirror<R, C, L> {
    engine: GroupingEngine<R, C>,
    links: Option<Arc<L>>,
}

impl<R, C, L> LegacyMirror<R, C, L>
where
    R: GroupRepository,
    C: ProductCatalog,
    L: LegacyLinkStore,
{
    /// Mirror writes into `links`.
    pub fn new(engine: GroupingEngine<R, C>, links: Arc<L>) -> Self {
        Self {
            engine,
            links: Some(links),
        }
    }

    /// Pass every call straight to the engine.
    pub fn passthrough(engine: GroupingEngine<R, C>) -> Self {
        Self {
            engine,
            links: None,
        }
    }

    /// Whether legacy writes are enabled.
    pub fn is_mirroring(&self) -> bool {
        self.links.is_some()
    }

    /// The wrapped engine, for read operations.
    pub fn engine(&self) -> &GroupingEngine<R, C> {
        &self.engine
    }

    /// Connect in the group store, then insert the symmetric legacy pair.
    pub async fn connect_products(
        &self,
        first: ProductId,
        second: ProductId,
    ) -> Result<ConnectOutcome> {
        let outcome = self.engine.connect_products(first, second).await?;
        if let Some(links) = &self.links {
            if let Err(e) = links.link(first, second).await {
                warn!(error = %e, %first, %second, "Failed to mirror legacy alternative link");
            }
        }
        Ok(outcome)
    }

    /// Disconnect in the group store, then drop every legacy row of `product`.
    pub async fn disconnect_product(&self, product: ProductId) -> Result<DisconnectOutcome> {
        let outcome = self.engine.disconnect_product(product).await?;
        self.unlink_all(product).await;
        Ok(outcome)
    }

    /// Merge in the group store, then link one member of each side in the
    /// legacy table. Legacy readers close over the pair transitively.
    pub async fn merge_groups(&self, into: GroupId, from: GroupId) -> Result<usize> {
        let bridge = match &self.links {
            Some(_) if into != from => {
                self.engine
                    .repository()
                    .atomically(move |tx| {
                        let first = tx.members(into)?.first().copied();
                        let second = tx.members(from)?.first().copied();
                        Ok(first.zip(second))
                    })
                    .await?
            }
            _ => None,
        };

        let moved = self.engine.merge_groups(into, from).await?;
        if let (Some(links), Some((first, second))) = (&self.links, bridge) {
            if let Err(e) = links.link(first, second).await {
                warn!(error = %e, %first, %second, "Failed to mirror merged groups");
            }
        }
        Ok(moved)
    }

    /// Product-deletion path with legacy cleanup.
    pub async fn remove_product(&self, product: ProductId) -> Result<bool> {
        let removed = self.engine.remove_product(product).await?;
        self.unlink_all(product).await;
        Ok(removed)
    }

    async fn unlink_all(&self, product: ProductId) {
        if let Some(links) = &self.links {
            if let Err(e) = links.unlink_all(product).await {
                warn!(error = %e, %product, "Failed to remove mirrored legacy links");
            }
        }
    }
}
