use colored::Colorize;

use crate::swiss::{RoundPairings, StandingsRow};

pub fn standings_table(standings: &[StandingsRow]) -> String {
    if standings.is_empty() {
        return "No players registered".dimmed().to_string();
    }

    let header = format!(
        "{:>4}  {:>4}  {:<24} {:>4} {:>4} {:>7}",
        "Rank", "Id", "Name", "W", "L", "Played"
    );
    let mut table = header.bold().to_string();
    for (idx, row) in standings.iter().enumerate() {
        table.push_str(&format!(
            "\n{:>4}  {:>4}  {:<24} {:>4} {:>4} {:>7}",
            idx + 1,
            row.id,
            row.name,
            row.wins,
            row.losses(),
            row.matches
        ));
    }
    table
}

pub fn pairings_table(round: &RoundPairings) -> String {
    let mut lines: Vec<String> = round
        .pairings
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            format!(
                "{:>3}. {} (#{}) {} {} (#{})",
                idx + 1,
                p.name1,
                p.id1,
                "vs".cyan(),
                p.name2,
                p.id2
            )
        })
        .collect();

    if let Some(bye) = &round.bye {
        lines.push(format!("{} {} (#{})", "Bye:".yellow(), bye.name, bye.id));
    }
    if lines.is_empty() {
        return "Not enough players to pair".dimmed().to_string();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swiss::pair_round;

    fn row(id: i64, name: &str, wins: i64, matches: i64) -> StandingsRow {
        StandingsRow {
            id,
            name: name.to_string(),
            wins,
            matches,
        }
    }

    #[test]
    fn test_standings_table_lists_every_player() {
        colored::control::set_override(false);
        let table = standings_table(&[row(1, "Alice", 2, 3), row(2, "Bob", 0, 3)]);

        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Alice"));
        assert!(table.lines().nth(2).unwrap().contains("Bob"));
    }

    #[test]
    fn test_pairings_table_shows_bye() {
        colored::control::set_override(false);
        let standings = [row(1, "Alice", 1, 1), row(2, "Bob", 1, 1), row(3, "Carol", 0, 1)];
        let table = pairings_table(&pair_round(&standings));

        assert!(table.contains("Alice (#1) vs Bob (#2)"));
        assert!(table.ends_with("Bye: Carol (#3)"));
    }
}
