use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StoreSettings;
use crate::errors::{with_pool_context, Result};

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(&settings.database_path));
    build_pool(manager, settings.pool_size, settings)
}

/// A single-connection pool over a private in-memory database.
///
/// Every in-memory connection is its own database, so the pool must never
/// hand out a second one.
pub fn create_memory_pool(settings: &StoreSettings) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());
    build_pool(manager, 1, settings)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, size: u32, settings: &StoreSettings) -> Result<DbPool> {
    let pool = r2d2::Pool::builder()
        .max_size(size)
        .connection_timeout(settings.connection_timeout())
        .build(manager);

    with_pool_context(pool, "create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    with_pool_context(pool.get(), "get database connection from pool")
}
