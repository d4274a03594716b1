use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::errors::{with_sql_context, Result};
use crate::swiss::types::PlayerId;

pub fn insert_match(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, played_at";

    with_sql_context(
        conn.query_row(sql, params![winner, loser], parse_match_row),
        "insert match",
    )
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        played_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner, loser, played_at FROM matches ORDER BY id";

    with_sql_context(query_rows(conn, sql), "list matches")
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let result = conn.execute("DELETE FROM matches", []).map(|_| ());
    with_sql_context(result, "delete matches")
}

fn query_rows(conn: &mut DbConn, sql: &str) -> rusqlite::Result<Vec<Match>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
