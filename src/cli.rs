use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::DEFAULT_DATABASE_PATH;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub database: String,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema if it does not exist
    Init,
    /// Delete all match records
    ClearMatches,
    /// Delete all players and their matches
    ClearPlayers,
    /// Print the number of registered players
    Count,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the result of a match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Show the current standings
    Standings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the pairings for the next round
    Pairings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let cli = Cli::parse_from(["swiss_tournament", "report", "3", "4"]);

        assert_eq!(cli.command, Command::Report { winner: 3, loser: 4 });
    }

    #[test]
    fn test_parse_database_flag_after_subcommand() {
        let cli = Cli::parse_from(["swiss_tournament", "standings", "--json", "--database", "cup.db"]);

        assert_eq!(cli.database, "cup.db");
        assert_eq!(cli.command, Command::Standings { json: true });
    }

    #[test]
    fn test_parse_clear_matches() {
        let cli = Cli::parse_from(["swiss_tournament", "clear-matches"]);

        assert_eq!(cli.command, Command::ClearMatches);
    }
}
