//! In-memory legacy link table.

use std::collections::BTreeSet;

use parking_lot::RwLock;

use crate::domain::id::ProductId;
use crate::domain::link::LegacyLink;
use crate::error::Result;
use crate::port::outbound::legacy::LegacyLinkStore;

/// Legacy pairwise links held in a set.
#[derive(Debug, Default)]
pub struct MemoryLegacyLinkStore {
    links: RwLock<BTreeSet<LegacyLink>>,
}

impl MemoryLegacyLinkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding exactly `links`, as given (no mirroring).
    pub fn with_links(links: impl IntoIterator<Item = LegacyLink>) -> Self {
        Self {
            links: RwLock::new(links.into_iter().collect()),
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }
}

impl LegacyLinkStore for MemoryLegacyLinkStore {
    async fn load_all(&self) -> Result<Vec<LegacyLink>> {
        Ok(self.links.read().iter().copied().collect())
    }

    async fn link(&self, a: ProductId, b: ProductId) -> Result<()> {
        let link = LegacyLink::new(a, b);
        let mut links = self.links.write();
        links.insert(link);
        links.insert(link.reversed());
        Ok(())
    }

    async fn unlink(&self, a: ProductId, b: ProductId) -> Result<usize> {
        let link = LegacyLink::new(a, b);
        let mut links = self.links.write();
        let removed = usize::from(links.remove(&link));
        if link.is_self_link() {
            return Ok(removed);
        }
        Ok(removed + usize::from(links.remove(&link.reversed())))
    }

    async fn unlink_all(&self, product: ProductId) -> Result<usize> {
        let mut links = self.links.write();
        let before = links.len();
        links.retain(|link| !link.touches(product));
        Ok(before - links.len())
    }
}
