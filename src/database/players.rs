use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;
use crate::errors::{with_sql_context, Result};
use crate::swiss::types::PlayerId;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, registered_at";

    with_sql_context(
        conn.query_row(sql, params![name], parse_player_row),
        "insert player",
    )
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        registered_at: row.get(2)?,
    })
}

pub fn count(conn: &mut DbConn) -> Result<i64> {
    let sql = "SELECT COUNT(id) FROM players";

    with_sql_context(conn.query_row(sql, [], |row| row.get(0)), "count players")
}

pub fn exists(conn: &mut DbConn, id: PlayerId) -> Result<bool> {
    let sql = "SELECT EXISTS (SELECT 1 FROM players WHERE id = ?1)";

    with_sql_context(
        conn.query_row(sql, params![id], |row| row.get(0)),
        "look up player",
    )
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, registered_at FROM players ORDER BY id";

    with_sql_context(query_rows(conn, sql), "list players")
}

/// Remove every player and, with them, every match
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let result = conn.transaction().and_then(|tx| {
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.commit()
    });
    with_sql_context(result, "delete players")
}

fn query_rows(conn: &mut DbConn, sql: &str) -> rusqlite::Result<Vec<Player>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
