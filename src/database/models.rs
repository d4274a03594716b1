use chrono::NaiveDateTime;
use serde::Serialize;

use crate::swiss::types::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i64,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub played_at: NaiveDateTime,
}
