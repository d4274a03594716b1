use log::info;

use super::{Retry, Store};
use crate::config::AppConfig;
use crate::database::models::{Match, Player};
use crate::database::{self, DbConn, DbPool};
use crate::errors::Result;
use crate::swiss::types::{PlayerId, StandingsRow};

/// `Store` backed by a pooled SQLite database
pub struct SqliteStore {
    pool: DbPool,
    retry: Retry,
}

impl SqliteStore {
    /// Open the database file named in the config and make sure the schema exists
    pub fn open(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.store)?;
        info!("Opened tournament database at {}", config.store.database_path);
        Self::from_pool(pool, config)
    }

    /// A throwaway store living in memory
    pub fn in_memory(config: &AppConfig) -> Result<Self> {
        let pool = database::create_memory_pool(&config.store)?;
        Self::from_pool(pool, config)
    }

    fn from_pool(pool: DbPool, config: &AppConfig) -> Result<Self> {
        let store = Self {
            pool,
            retry: Retry::new(config.retry.clone()),
        };
        store.with_connection("create schema", database::setup::ensure_schema)?;
        Ok(store)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        self.with_connection("list players", database::players::list_all)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        self.with_connection("list matches", database::matches::list_all)
    }

    fn with_connection<T, F>(&self, operation: &str, mut call: F) -> Result<T>
    where
        F: FnMut(&mut DbConn) -> Result<T>,
    {
        self.retry.run(operation, || {
            let mut conn = database::get_connection(&self.pool)?;
            call(&mut conn)
        })
    }
}

impl Store for SqliteStore {
    fn clear_matches(&self) -> Result<()> {
        self.with_connection("clear matches", database::matches::delete_all)
    }

    fn clear_players(&self) -> Result<()> {
        self.with_connection("clear players", database::players::delete_all)
    }

    fn count_players(&self) -> Result<i64> {
        self.with_connection("count players", database::players::count)
    }

    fn register_player(&self, name: &str) -> Result<Player> {
        self.with_connection("register player", |conn| {
            database::players::insert_player(conn, name)
        })
    }

    fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        self.with_connection("report match", |conn| {
            database::matches::insert_match(conn, winner, loser)
        })
    }

    fn player_exists(&self, id: PlayerId) -> Result<bool> {
        self.with_connection("look up player", |conn| {
            database::players::exists(conn, id)
        })
    }

    fn fetch_standings(&self) -> Result<Vec<StandingsRow>> {
        self.with_connection("fetch standings", database::standings::fetch)
    }
}
