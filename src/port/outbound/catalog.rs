//! Catalog port: the product records the engine groups.

use std::future::Future;

use crate::domain::id::ProductId;
use crate::error::Result;

/// Read access to product existence, plus the delete used by the
/// product-removal path.
pub trait ProductCatalog: Send + Sync {
    /// Whether the catalog knows `product`.
    fn exists(&self, product: ProductId) -> impl Future<Output = Result<bool>> + Send;

    /// Remove the product record. Returns false if it was already gone.
    fn remove(&self, product: ProductId) -> impl Future<Output = Result<bool>> + Send;
}

/// Catalog that accepts every id and owns no records.
///
/// Used when the integrating system does not enable existence checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCatalog;

impl ProductCatalog for OpenCatalog {
    async fn exists(&self, _product: ProductId) -> Result<bool> {
        Ok(true)
    }

    async fn remove(&self, _product: ProductId) -> Result<bool> {
        Ok(false)
    }
}
