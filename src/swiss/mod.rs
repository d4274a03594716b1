pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::pair_round;
pub use standings::rank;
pub use types::{Bye, Pairing, PlayerId, RoundPairings, StandingsRow};
