pub mod retry;
pub mod sqlite;

pub use retry::Retry;
pub use sqlite::SqliteStore;

use crate::database::models::{Match, Player};
use crate::errors::Result;
use crate::swiss::types::{PlayerId, StandingsRow};

/// Durable record of players and match results
pub trait Store {
    /// Delete every match record. Idempotent.
    fn clear_matches(&self) -> Result<()>;

    /// Delete every player along with the matches that reference them. Idempotent.
    fn clear_players(&self) -> Result<()>;

    fn count_players(&self) -> Result<i64>;

    /// Add a player; the store assigns the id
    fn register_player(&self, name: &str) -> Result<Player>;

    fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match>;

    fn player_exists(&self, id: PlayerId) -> Result<bool>;

    /// Aggregated win and match counts for every registered player, most wins first
    fn fetch_standings(&self) -> Result<Vec<StandingsRow>>;
}
