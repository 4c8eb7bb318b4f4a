//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Pool sizing and per-connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum pooled connections. Forced to 1 for in-memory databases,
    /// where every connection would otherwise see its own empty database.
    pub max_size: u32,
    /// How long a writer waits for a lock before failing.
    pub busy_timeout_ms: u64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: 5,
            busy_timeout_ms: 5000,
        }
    }
}

/// Pragmas applied to every connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout_ms: u64,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        diesel::sql_query(format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms))
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Whether `database_url` names a private in-memory database.
#[must_use]
pub fn is_memory_url(database_url: &str) -> bool {
    database_url == ":memory:" || database_url.starts_with("file::memory:")
}

/// Create a connection pool with default options.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    create_pool_with(database_url, PoolOptions::default())
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool_with(database_url: &str, options: PoolOptions) -> Result<DbPool> {
    let max_size = if is_memory_url(database_url) {
        1
    } else {
        options.max_size.max(1)
    };
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout_ms: options.busy_timeout_ms,
        }))
        .build(manager)
        .map_err(|e| Error::Storage(format!("connection pool: {e}")))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Storage(format!("schema migration: {e}")))?;
    Ok(())
}

/// Run `work` with a pooled connection on the blocking thread pool.
///
/// Diesel is synchronous; this keeps database round trips off the async
/// executor threads.
pub async fn with_connection<T, F>(pool: &DbPool, work: F) -> Result<T>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        work(&mut conn)
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct PragmaValue {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        value: i64,
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn memory_pool_is_limited_to_one_connection() {
        let pool = create_pool_with(
            ":memory:",
            PoolOptions {
                max_size: 8,
                busy_timeout_ms: 100,
            },
        )
        .unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn run_migrations_creates_tables() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let tables: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(
            tables,
            vec![
                "grouping_markers".to_string(),
                "product_alternatives".to_string(),
                "product_group_members".to_string(),
                "product_groups".to_string(),
                "products".to_string(),
            ]
        );
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let pool = create_pool(":memory:").unwrap();
        let mut conn = pool.get().unwrap();

        let rows: Vec<PragmaValue> = diesel::sql_query("SELECT foreign_keys AS value FROM pragma_foreign_keys")
            .load(&mut conn)
            .unwrap();
        assert_eq!(rows[0].value, 1);
    }

    #[tokio::test]
    async fn with_connection_runs_on_blocking_pool() {
        let pool = create_pool(":memory:").unwrap();
        let value = with_connection(&pool, |conn| {
            let rows: Vec<PragmaValue> = diesel::sql_query("SELECT 7 AS value").load(conn)?;
            Ok(rows[0].value)
        })
        .await
        .unwrap();
        assert_eq!(value, 7);
    }
}
