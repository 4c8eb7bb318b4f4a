use std::path::{Path, PathBuf};
use std::sync::Arc;

use alternates::adapter::outbound::sqlite::catalog::SqliteProductCatalog;
use alternates::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use alternates::adapter::outbound::sqlite::legacy::SqliteLegacyLinkStore;
use alternates::adapter::outbound::sqlite::store::SqliteGroupRepository;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The file lives in its own directory, removed on drop.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("alternates.db");
        let pool = create_pool(&path.to_string_lossy()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    /// Database file path, for wiring services through a config.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> Arc<SqliteGroupRepository> {
        Arc::new(SqliteGroupRepository::new(self.pool.clone()))
    }

    pub fn links(&self) -> Arc<SqliteLegacyLinkStore> {
        Arc::new(SqliteLegacyLinkStore::new(self.pool.clone()))
    }

    pub fn catalog(&self) -> Arc<SqliteProductCatalog> {
        Arc::new(SqliteProductCatalog::new(self.pool.clone()))
    }
}
