//! Product to alternatives adjacency derived from group membership.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::group::{members_by_group, Membership};
use super::id::ProductId;

/// For every grouped product, the set of its co-members excluding itself.
///
/// Two products are alternatives iff they share a group, so every entry's
/// set is exactly its group minus the product. Ungrouped products have no
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlternativesMap(BTreeMap<ProductId, BTreeSet<ProductId>>);

impl AlternativesMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from the full membership relation.
    ///
    /// O(total memberships + sum of squared group sizes).
    pub fn from_memberships(memberships: impl IntoIterator<Item = Membership>) -> Self {
        let mut map = BTreeMap::new();
        for members in members_by_group(memberships).into_values() {
            for &product in &members {
                let others: BTreeSet<ProductId> =
                    members.iter().copied().filter(|&p| p != product).collect();
                map.insert(product, others);
            }
        }
        Self(map)
    }

    /// Alternatives of `product`, ascending. Empty when ungrouped.
    pub fn alternatives_of(&self, product: ProductId) -> impl Iterator<Item = ProductId> + '_ {
        self.0
            .get(&product)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Whether `a` and `b` are alternatives of each other.
    #[must_use]
    pub fn are_alternatives(&self, a: ProductId, b: ProductId) -> bool {
        self.0.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Number of grouped products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(product, alternatives)` in ascending product order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &BTreeSet<ProductId>)> {
        self.0.iter().map(|(product, set)| (*product, set))
    }

    /// Insert an explicit entry. Used by callers that assemble the map from
    /// a source other than group membership.
    pub fn insert(&mut self, product: ProductId, alternatives: BTreeSet<ProductId>) {
        self.0.insert(product, alternatives);
    }
}

impl FromIterator<(ProductId, BTreeSet<ProductId>)> for AlternativesMap {
    fn from_iter<I: IntoIterator<Item = (ProductId, BTreeSet<ProductId>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
