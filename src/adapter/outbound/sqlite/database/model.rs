//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{
    grouping_markers, product_alternatives, product_group_members, product_groups, products,
};

/// Database row for a group.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = product_groups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GroupRow {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Database row for a group (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = product_groups)]
pub struct NewGroupRow<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub created_at: String,
}

/// Database row for a membership.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy)]
#[diesel(table_name = product_group_members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MembershipRow {
    pub product_id: i64,
    pub group_id: i64,
}

/// Database row for a legacy alternative link.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy)]
#[diesel(table_name = product_alternatives)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LegacyLinkRow {
    pub product_id: i64,
    pub alternative_product_id: i64,
}

/// Database row for a catalog product.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
}

/// Database row for a migration completion marker (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = grouping_markers)]
pub struct NewMarkerRow<'a> {
    pub name: &'a str,
    pub recorded_at: String,
}

/// Result row for `SELECT last_insert_rowid()`.
#[derive(QueryableByName, Debug)]
pub struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
}
