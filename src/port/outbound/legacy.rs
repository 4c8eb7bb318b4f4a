//! Port for the deprecated pairwise alternative table.

use std::future::Future;

use crate::domain::id::ProductId;
use crate::domain::link::LegacyLink;
use crate::error::Result;

/// Storage operations for legacy pairwise links.
pub trait LegacyLinkStore: Send + Sync {
    /// Every stored row, in both directions as stored.
    fn load_all(&self) -> impl Future<Output = Result<Vec<LegacyLink>>> + Send;

    /// Insert `(a, b)` and `(b, a)`, ignoring rows that already exist.
    fn link(&self, a: ProductId, b: ProductId) -> impl Future<Output = Result<()>> + Send;

    /// Delete `(a, b)` and `(b, a)`. Returns rows deleted.
    fn unlink(&self, a: ProductId, b: ProductId) -> impl Future<Output = Result<usize>> + Send;

    /// Delete every row touching `product`. Returns rows deleted.
    fn unlink_all(&self, product: ProductId) -> impl Future<Output = Result<usize>> + Send;
}
