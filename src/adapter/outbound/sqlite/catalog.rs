//! SQLite product catalog over the `products` table.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::{with_connection, DbPool};
use crate::adapter::outbound::sqlite::database::model::ProductRow;
use crate::adapter::outbound::sqlite::database::schema::products;
use crate::domain::id::ProductId;
use crate::error::Result;
use crate::port::outbound::catalog::ProductCatalog;

/// SQLite-backed product catalog.
#[derive(Clone)]
pub struct SqliteProductCatalog {
    pool: DbPool,
}

impl SqliteProductCatalog {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert or rename a product record.
    pub async fn upsert(&self, product: ProductId, name: impl Into<String>) -> Result<()> {
        let row = ProductRow {
            id: product.get(),
            name: name.into(),
        };
        with_connection(&self.pool, move |conn| {
            diesel::replace_into(products::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }
}

impl ProductCatalog for SqliteProductCatalog {
    async fn exists(&self, product: ProductId) -> Result<bool> {
        with_connection(&self.pool, move |conn| {
            let found: Option<i64> = products::table
                .find(product.get())
                .select(products::id)
                .first(conn)
                .optional()?;
            Ok(found.is_some())
        })
        .await
    }

    async fn remove(&self, product: ProductId) -> Result<bool> {
        with_connection(&self.pool, move |conn| {
            let deleted = diesel::delete(products::table.find(product.get())).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}
