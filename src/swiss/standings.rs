use super::types::StandingsRow;

/// Order rows best to worst by wins.
///
/// The sort is stable, so players with equal wins keep the order the store
/// returned them in.
pub fn rank(mut rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, wins: i64, matches: i64) -> StandingsRow {
        StandingsRow {
            id,
            name: format!("Player {id}"),
            wins,
            matches,
        }
    }

    #[test]
    fn test_rank_orders_by_wins_descending() {
        let ranked = rank(vec![row(1, 0, 1), row(2, 2, 2), row(3, 1, 2)]);

        let ids: Vec<i64> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_keeps_store_order_for_ties() {
        let ranked = rank(vec![row(4, 1, 1), row(2, 0, 1), row(3, 1, 1), row(1, 0, 1)]);

        let ids: Vec<i64> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
