use log::{debug, info};

use crate::database::models::Match;
use crate::errors::{Result, TournamentError};
use crate::store::Store;
use crate::swiss::{self, PlayerId, RoundPairings, StandingsRow};

/// A Swiss tournament over an injected store
pub struct Tournament<S: Store> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clear_matches(&self) -> Result<()> {
        self.store.clear_matches()?;
        info!("Cleared all match records");
        Ok(())
    }

    pub fn clear_players(&self) -> Result<()> {
        self.store.clear_players()?;
        info!("Cleared all players and their matches");
        Ok(())
    }

    pub fn count_players(&self) -> Result<i64> {
        self.store.count_players()
    }

    /// Register a player and return the id the store assigned
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        if name.trim().is_empty() {
            return Err(TournamentError::InvalidInput(
                "player name must not be empty".to_string(),
            ));
        }

        let player = self.store.register_player(name)?;
        info!("Registered player {} as #{}", player.name, player.id);
        Ok(player.id)
    }

    /// Record that `winner` beat `loser`
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        if winner == loser {
            return Err(TournamentError::InvalidInput(format!(
                "player #{winner} cannot play against themselves"
            )));
        }
        self.ensure_registered(winner)?;
        self.ensure_registered(loser)?;

        let recorded = self.store.report_match(winner, loser)?;
        info!("Recorded match #{}: #{} beat #{}", recorded.id, winner, loser);
        Ok(recorded)
    }

    pub fn standings(&self) -> Result<Vec<StandingsRow>> {
        let standings = swiss::rank(self.store.fetch_standings()?);
        debug!("Computed standings for {} players", standings.len());
        Ok(standings)
    }

    /// Pair the current standings for the next round
    pub fn pairings(&self) -> Result<RoundPairings> {
        let standings = self.standings()?;
        let round = swiss::pair_round(&standings);

        debug!("Paired {} matches", round.len());
        if let Some(bye) = &round.bye {
            info!("Odd headcount: {} (#{}) sits out this round", bye.name, bye.id);
        }
        Ok(round)
    }

    fn ensure_registered(&self, id: PlayerId) -> Result<()> {
        if self.store.player_exists(id)? {
            Ok(())
        } else {
            Err(TournamentError::InvalidReference(id))
        }
    }
}
