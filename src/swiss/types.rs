use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

impl StandingsRow {
    pub fn losses(&self) -> i64 {
        self.matches - self.wins
    }
}

/// Two players meeting in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &StandingsRow, second: &StandingsRow) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.id1 == player_id || self.id2 == player_id
    }
}

/// The player left without an opponent on an odd headcount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bye {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingsRow> for Bye {
    fn from(row: &StandingsRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairings: Vec<Pairing>,
    pub bye: Option<Bye>,
}

impl RoundPairings {
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Every player id scheduled this round, bye included
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .pairings
            .iter()
            .flat_map(|p| [p.id1, p.id2])
            .collect();
        ids.extend(self.bye.iter().map(|b| b.id));
        ids
    }
}
