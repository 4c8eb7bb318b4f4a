//! Legacy pairwise alternative links.
//!
//! Before groups existed, alternatives were stored as `(product, alternative)`
//! rows, inserted in both directions. The rows are now only a migration
//! source and a best-effort mirror.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One row of the deprecated pairwise relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LegacyLink {
    pub product_id: ProductId,
    pub alternative_product_id: ProductId,
}

impl LegacyLink {
    #[must_use]
    pub const fn new(product_id: ProductId, alternative_product_id: ProductId) -> Self {
        Self {
            product_id,
            alternative_product_id,
        }
    }

    /// The same link read in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.alternative_product_id, self.product_id)
    }

    /// Whether the link points a product at itself (malformed data).
    #[must_use]
    pub fn is_self_link(&self) -> bool {
        self.product_id == self.alternative_product_id
    }

    /// Whether either end of the link is `product`.
    #[must_use]
    pub fn touches(&self, product: ProductId) -> bool {
        self.product_id == product || self.alternative_product_id == product
    }
}
