pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod services;
pub mod store;
pub mod swiss;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::config::AppConfig;
use crate::services::Tournament;
use crate::store::SqliteStore;

pub use crate::cli::Command;
pub use crate::errors::TournamentError;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_tournament(database: &str) -> Result<Tournament<SqliteStore>> {
    let config = AppConfig::new().with_database_path(database);
    let store = SqliteStore::open(&config)?;
    Ok(Tournament::new(store))
}

pub fn handle_init(database: &str) -> Result<()> {
    open_tournament(database)?;
    println!("Database ready at {database}");
    Ok(())
}

pub fn handle_clear_matches(database: &str) -> Result<()> {
    open_tournament(database)?.clear_matches()?;
    Ok(())
}

pub fn handle_clear_players(database: &str) -> Result<()> {
    open_tournament(database)?.clear_players()?;
    Ok(())
}

pub fn handle_count(database: &str) -> Result<()> {
    let count = open_tournament(database)?.count_players()?;
    println!("{count}");
    Ok(())
}

pub fn handle_register(database: &str, name: &str) -> Result<()> {
    let id = open_tournament(database)?.register_player(name)?;
    println!("{id}");
    Ok(())
}

pub fn handle_report(database: &str, winner: i64, loser: i64) -> Result<()> {
    open_tournament(database)?.report_match(winner, loser)?;
    Ok(())
}

pub fn handle_standings(database: &str, json: bool) -> Result<()> {
    let standings = open_tournament(database)?.standings()?;
    let rendered = if json {
        serde_json::to_string_pretty(&standings)?
    } else {
        output::standings_table(&standings)
    };
    println!("{rendered}");
    Ok(())
}

pub fn handle_pairings(database: &str, json: bool) -> Result<()> {
    let round = open_tournament(database)?.pairings()?;
    let rendered = if json {
        serde_json::to_string_pretty(&round)?
    } else {
        output::pairings_table(&round)
    };
    println!("{rendered}");
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
