//! SQLite group repository implementation.
//!
//! Every unit of work runs inside `BEGIN IMMEDIATE` on the blocking thread
//! pool. The write lock is taken before the first read, so two units of work
//! that read the same membership rows can never both act on a stale view.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    GroupRow, LastInsertRowId, MembershipRow, NewGroupRow, NewMarkerRow,
};
use crate::adapter::outbound::sqlite::database::schema::{
    grouping_markers, product_group_members, product_groups,
};
use crate::domain::group::{Group, Membership, NewGroup};
use crate::domain::id::{GroupId, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{GroupRepository, GroupTransaction};

/// SQLite-backed group repository.
///
/// Implements the [`GroupRepository`] trait over the `product_groups` and
/// `product_group_members` tables.
#[derive(Clone)]
pub struct SqliteGroupRepository {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteGroupRepository {
    /// Create a new SQLite group repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl GroupRepository for SqliteGroupRepository {
    async fn atomically<R, F>(&self, work: F) -> Result<R>
    where
        F: FnOnce(&mut dyn GroupTransaction) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            conn.immediate_transaction(|conn| {
                let mut tx = SqliteTransaction { conn };
                work(&mut tx)
            })
        })
        .await?
    }
}

/// A unit of work bound to one open transaction.
struct SqliteTransaction<'a> {
    conn: &'a mut SqliteConnection,
}

fn group_from_row(row: GroupRow) -> Result<Group> {
    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
        .map_err(|e| Error::Storage(format!("group {} created_at: {e}", row.id)))?
        .with_timezone(&Utc);

    Ok(Group {
        id: GroupId::new(row.id),
        name: row.name,
        description: row.description,
        created_at,
    })
}

/// Marker name recorded once the legacy link migration has run.
const LEGACY_MIGRATION_MARKER: &str = "legacy_links";

fn count_to_usize(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

impl GroupTransaction for SqliteTransaction<'_> {
    fn group_of(&mut self, product: ProductId) -> Result<Option<GroupId>> {
        let group: Option<i64> = product_group_members::table
            .find(product.get())
            .select(product_group_members::group_id)
            .first(self.conn)
            .optional()?;
        Ok(group.map(GroupId::new))
    }

    fn group(&mut self, id: GroupId) -> Result<Option<Group>> {
        let row: Option<GroupRow> = product_groups::table
            .find(id.get())
            .select(GroupRow::as_select())
            .first(self.conn)
            .optional()?;
        row.map(group_from_row).transpose()
    }

    fn groups(&mut self) -> Result<Vec<Group>> {
        let rows: Vec<GroupRow> = product_groups::table
            .order(product_groups::id.asc())
            .select(GroupRow::as_select())
            .load(self.conn)?;
        rows.into_iter().map(group_from_row).collect()
    }

    fn create_group(&mut self, group: &NewGroup) -> Result<GroupId> {
        let row = NewGroupRow {
            name: group.name.as_deref(),
            description: group.description.as_deref(),
            created_at: Utc::now().to_rfc3339(),
        };
        diesel::insert_into(product_groups::table)
            .values(&row)
            .execute(self.conn)?;

        let last: LastInsertRowId =
            diesel::sql_query("SELECT last_insert_rowid() AS id").get_result(self.conn)?;
        Ok(GroupId::new(last.id))
    }

    fn update_group(&mut self, id: GroupId, group: &NewGroup) -> Result<bool> {
        let updated = diesel::update(product_groups::table.find(id.get()))
            .set((
                product_groups::name.eq(group.name.as_deref()),
                product_groups::description.eq(group.description.as_deref()),
            ))
            .execute(self.conn)?;
        Ok(updated > 0)
    }

    fn delete_group(&mut self, id: GroupId) -> Result<bool> {
        diesel::delete(
            product_group_members::table.filter(product_group_members::group_id.eq(id.get())),
        )
        .execute(self.conn)?;
        let deleted = diesel::delete(product_groups::table.find(id.get())).execute(self.conn)?;
        Ok(deleted > 0)
    }

    fn add_member(&mut self, product: ProductId, group: GroupId) -> Result<()> {
        diesel::insert_into(product_group_members::table)
            .values(&MembershipRow {
                product_id: product.get(),
                group_id: group.get(),
            })
            .execute(self.conn)?;
        Ok(())
    }

    fn remove_member(&mut self, product: ProductId) -> Result<Option<GroupId>> {
        let group = self.group_of(product)?;
        if group.is_some() {
            diesel::delete(product_group_members::table.find(product.get())).execute(self.conn)?;
        }
        Ok(group)
    }

    fn move_members(&mut self, from: GroupId, to: GroupId) -> Result<usize> {
        let moved = diesel::update(
            product_group_members::table.filter(product_group_members::group_id.eq(from.get())),
        )
        .set(product_group_members::group_id.eq(to.get()))
        .execute(self.conn)?;
        Ok(moved)
    }

    fn members(&mut self, group: GroupId) -> Result<Vec<ProductId>> {
        let ids: Vec<i64> = product_group_members::table
            .filter(product_group_members::group_id.eq(group.get()))
            .order(product_group_members::product_id.asc())
            .select(product_group_members::product_id)
            .load(self.conn)?;
        Ok(ids.into_iter().map(ProductId::new).collect())
    }

    fn member_count(&mut self, group: GroupId) -> Result<usize> {
        let count: i64 = product_group_members::table
            .filter(product_group_members::group_id.eq(group.get()))
            .count()
            .get_result(self.conn)?;
        Ok(count_to_usize(count))
    }

    fn memberships(&mut self) -> Result<Vec<Membership>> {
        let rows: Vec<MembershipRow> = product_group_members::table
            .order(product_group_members::product_id.asc())
            .select(MembershipRow::as_select())
            .load(self.conn)?;
        Ok(rows
            .into_iter()
            .map(|row| Membership::new(ProductId::new(row.product_id), GroupId::new(row.group_id)))
            .collect())
    }

    fn membership_count(&mut self) -> Result<usize> {
        let count: i64 = product_group_members::table
            .count()
            .get_result(self.conn)?;
        Ok(count_to_usize(count))
    }

    fn legacy_migration_recorded(&mut self) -> Result<bool> {
        let count: i64 = grouping_markers::table
            .filter(grouping_markers::name.eq(LEGACY_MIGRATION_MARKER))
            .count()
            .get_result(self.conn)?;
        Ok(count > 0)
    }

    fn record_legacy_migration(&mut self) -> Result<()> {
        diesel::insert_or_ignore_into(grouping_markers::table)
            .values(&NewMarkerRow {
                name: LEGACY_MIGRATION_MARKER,
                recorded_at: Utc::now().to_rfc3339(),
            })
            .execute(self.conn)?;
        Ok(())
    }
}
