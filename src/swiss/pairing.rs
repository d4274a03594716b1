use super::types::{Bye, Pairing, RoundPairings, StandingsRow};

/// Pair a ranked field for the next round.
///
/// Players are taken two at a time from the top of `standings`, so every
/// pairing joins two players adjacent in the ranking. On an odd headcount the
/// lowest-ranked player is left over and returned as the bye.
pub fn pair_round(standings: &[StandingsRow]) -> RoundPairings {
    let chunks = standings.chunks_exact(2);
    let bye = chunks.remainder().first().map(Bye::from);
    let pairings = chunks
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();

    RoundPairings { pairings, bye }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(records: &[(i64, i64)]) -> Vec<StandingsRow> {
        records
            .iter()
            .map(|&(id, wins)| StandingsRow {
                id,
                name: format!("Player {id}"),
                wins,
                matches: 1,
            })
            .collect()
    }

    #[test]
    fn test_empty_field_has_no_pairings() {
        let round = pair_round(&[]);

        assert!(round.is_empty());
        assert_eq!(round.bye, None);
    }

    #[test]
    fn test_single_player_gets_bye() {
        let round = pair_round(&field(&[(7, 0)]));

        assert!(round.is_empty());
        assert_eq!(round.bye.map(|b| b.id), Some(7));
    }

    #[test]
    fn test_pairs_adjacent_players() {
        let standings = field(&[(1, 1), (3, 1), (2, 0), (4, 0)]);
        let round = pair_round(&standings);

        assert_eq!(round.len(), 2);
        assert_eq!((round.pairings[0].id1, round.pairings[0].id2), (1, 3));
        assert_eq!((round.pairings[1].id1, round.pairings[1].id2), (2, 4));
        assert_eq!(round.bye, None);
    }

    #[test]
    fn test_odd_field_leaves_lowest_ranked_as_bye() {
        let standings = field(&[(5, 2), (1, 1), (2, 1), (3, 0), (4, 0)]);
        let round = pair_round(&standings);

        assert_eq!(round.len(), 2);
        assert_eq!(round.bye.as_ref().map(|b| b.id), Some(4));
        assert!(!round.pairings.iter().any(|p| p.involves(4)));
    }

    #[test]
    fn test_every_player_scheduled_once() {
        for n in 0..12 {
            let records: Vec<(i64, i64)> = (1..=n).map(|id| (id, n - id)).collect();
            let standings = field(&records);
            let round = pair_round(&standings);

            let mut ids = round.player_ids();
            ids.sort_unstable();
            let expected: Vec<i64> = (1..=n).collect();
            assert_eq!(ids, expected, "field of {n}");
            assert_eq!(round.len() as i64, n / 2);
            assert_eq!(round.bye.is_some(), n % 2 == 1);
        }
    }

    #[test]
    fn test_pairings_are_rank_adjacent() {
        let standings = field(&[(10, 3), (11, 2), (12, 2), (13, 1), (14, 1), (15, 0)]);
        let round = pair_round(&standings);

        for pairing in &round.pairings {
            let first = standings.iter().position(|r| r.id == pairing.id1).unwrap();
            let second = standings.iter().position(|r| r.id == pairing.id2).unwrap();
            assert_eq!(second, first + 1);
        }
    }
}
