//! SQLite store for the deprecated `product_alternatives` table.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::{with_connection, DbPool};
use crate::adapter::outbound::sqlite::database::model::LegacyLinkRow;
use crate::adapter::outbound::sqlite::database::schema::product_alternatives;
use crate::domain::id::ProductId;
use crate::domain::link::LegacyLink;
use crate::error::Result;
use crate::port::outbound::legacy::LegacyLinkStore;

/// SQLite-backed legacy link store.
#[derive(Clone)]
pub struct SqliteLegacyLinkStore {
    pool: DbPool,
}

impl SqliteLegacyLinkStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl LegacyLinkStore for SqliteLegacyLinkStore {
    async fn load_all(&self) -> Result<Vec<LegacyLink>> {
        with_connection(&self.pool, |conn| {
            let rows: Vec<LegacyLinkRow> = product_alternatives::table
                .order((
                    product_alternatives::product_id.asc(),
                    product_alternatives::alternative_product_id.asc(),
                ))
                .select(LegacyLinkRow::as_select())
                .load(conn)?;
            Ok(rows
                .into_iter()
                .map(|row| {
                    LegacyLink::new(
                        ProductId::new(row.product_id),
                        ProductId::new(row.alternative_product_id),
                    )
                })
                .collect())
        })
        .await
    }

    async fn link(&self, a: ProductId, b: ProductId) -> Result<()> {
        with_connection(&self.pool, move |conn| {
            let rows = [
                LegacyLinkRow {
                    product_id: a.get(),
                    alternative_product_id: b.get(),
                },
                LegacyLinkRow {
                    product_id: b.get(),
                    alternative_product_id: a.get(),
                },
            ];
            for row in &rows {
                diesel::insert_or_ignore_into(product_alternatives::table)
                    .values(row)
                    .execute(conn)?;
            }
            Ok(())
        })
        .await
    }

    async fn unlink(&self, a: ProductId, b: ProductId) -> Result<usize> {
        with_connection(&self.pool, move |conn| {
            let (a, b) = (a.get(), b.get());
            let deleted = diesel::delete(
                product_alternatives::table.filter(
                    product_alternatives::product_id
                        .eq(a)
                        .and(product_alternatives::alternative_product_id.eq(b))
                        .or(product_alternatives::product_id
                            .eq(b)
                            .and(product_alternatives::alternative_product_id.eq(a))),
                ),
            )
            .execute(conn)?;
            Ok(deleted)
        })
        .await
    }

    async fn unlink_all(&self, product: ProductId) -> Result<usize> {
        with_connection(&self.pool, move |conn| {
            let id = product.get();
            let deleted = diesel::delete(
                product_alternatives::table.filter(
                    product_alternatives::product_id
                        .eq(id)
                        .or(product_alternatives::alternative_product_id.eq(id)),
                ),
            )
            .execute(conn)?;
            Ok(deleted)
        })
        .await
    }
}
