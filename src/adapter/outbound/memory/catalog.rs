//! In-memory product catalog.

use std::collections::BTreeSet;

use parking_lot::RwLock;

use crate::domain::id::ProductId;
use crate::error::Result;
use crate::port::outbound::catalog::ProductCatalog;

/// Set of known product ids.
#[derive(Debug, Default)]
pub struct MemoryProductCatalog {
    products: RwLock<BTreeSet<ProductId>>,
}

impl MemoryProductCatalog {
    /// Create a catalog holding `products`.
    pub fn with_products(products: impl IntoIterator<Item = ProductId>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().collect()),
        }
    }

    /// Register a product.
    pub fn insert(&self, product: ProductId) {
        self.products.write().insert(product);
    }
}

impl ProductCatalog for MemoryProductCatalog {
    async fn exists(&self, product: ProductId) -> Result<bool> {
        Ok(self.products.read().contains(&product))
    }

    async fn remove(&self, product: ProductId) -> Result<bool> {
        Ok(self.products.write().remove(&product))
    }
}
