//! Display clusters for a catalog slice.
//!
//! The [`build_clusters`] function partitions an ordered list of catalog
//! items into singletons and multi-product clusters using an
//! [`AlternativesMap`]. It is pure: no store access, no reordering of the
//! caller's slice beyond grouping.
//!
//! Only items present in the slice are pulled into a cluster. A group member
//! that the caller filtered out stays out, even when it links two visible
//! members together.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use super::alternatives::AlternativesMap;
use super::id::ProductId;

/// Anything that can be placed in a display cluster.
pub trait CatalogItem {
    /// Identifier used to look up alternatives.
    fn product_id(&self) -> ProductId;
}

impl CatalogItem for ProductId {
    fn product_id(&self) -> ProductId {
        *self
    }
}

impl<T: CatalogItem> CatalogItem for &T {
    fn product_id(&self) -> ProductId {
        (**self).product_id()
    }
}

/// One entry of the cluster view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterEntry<P> {
    /// A product with no visible alternatives.
    Single { item: P },
    /// Several visible products from one group.
    ///
    /// `primary` is the earliest of them in the input order; `alternatives`
    /// keep their relative input order.
    Cluster { primary: P, alternatives: Vec<P> },
}

impl<P> ClusterEntry<P> {
    /// The item used for sorting and display of the entry.
    pub fn primary(&self) -> &P {
        match self {
            Self::Single { item } => item,
            Self::Cluster { primary, .. } => primary,
        }
    }

    /// Whether the entry holds more than one product.
    pub fn is_cluster(&self) -> bool {
        matches!(self, Self::Cluster { .. })
    }

    /// Number of items in the entry.
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Cluster { alternatives, .. } => 1 + alternatives.len(),
        }
    }

    /// Entries are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the items, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        let rest: &[P] = match self {
            Self::Single { .. } => &[],
            Self::Cluster { alternatives, .. } => alternatives,
        };
        std::iter::once(self.primary()).chain(rest.iter())
    }

    /// Consume the entry, returning its items primary first.
    pub fn into_items(self) -> Vec<P> {
        match self {
            Self::Single { item } => vec![item],
            Self::Cluster {
                primary,
                mut alternatives,
            } => {
                alternatives.insert(0, primary);
                alternatives
            }
        }
    }
}

/// Partition `items` into display clusters.
///
/// For each not-yet-visited item in input order, a breadth-first expansion
/// over `alternatives` collects every reachable product that is also in
/// `items`. Components of one item become [`ClusterEntry::Single`], larger
/// ones [`ClusterEntry::Cluster`]. Entries appear in the order of their
/// earliest item.
///
/// Every input item lands in exactly one entry; repeated product ids in the
/// input are kept together in the same entry.
pub fn build_clusters<P: CatalogItem>(
    items: Vec<P>,
    alternatives: &AlternativesMap,
) -> Vec<ClusterEntry<P>> {
    let mut positions: HashMap<ProductId, Vec<usize>> = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        positions.entry(item.product_id()).or_default().push(index);
    }

    let mut visited = vec![false; items.len()];
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(items.len());
    let mut components: Vec<Vec<usize>> = Vec::new();

    for start in 0..items.len() {
        if visited[start] {
            continue;
        }

        let start_id = items[start].product_id();
        seen.insert(start_id);
        let mut queue = VecDeque::from([start_id]);
        let mut component = Vec::new();

        while let Some(product) = queue.pop_front() {
            if let Some(indices) = positions.get(&product) {
                for &index in indices {
                    visited[index] = true;
                    component.push(index);
                }
            }
            for next in alternatives.alternatives_of(product) {
                if positions.contains_key(&next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    let mut slots: Vec<Option<P>> = items.into_iter().map(Some).collect();
    components
        .into_iter()
        .filter_map(|component| {
            let mut taken = component.into_iter().filter_map(|index| slots[index].take());
            let primary = taken.next()?;
            let rest: Vec<P> = taken.collect();
            Some(if rest.is_empty() {
                ClusterEntry::Single { item: primary }
            } else {
                ClusterEntry::Cluster {
                    primary,
                    alternatives: rest,
                }
            })
        })
        .collect()
}
