use super::connection::DbConn;
use crate::errors::{with_sql_context, Result};
use crate::swiss::types::StandingsRow;

/// Read the standings view, best record first; equal records keep registration order
pub fn fetch(conn: &mut DbConn) -> Result<Vec<StandingsRow>> {
    let sql = "SELECT id, name, wins, matches FROM player_standings ORDER BY wins DESC, id ASC";

    with_sql_context(query_rows(conn, sql), "fetch standings")
}

fn parse_standings_row(row: &rusqlite::Row) -> rusqlite::Result<StandingsRow> {
    Ok(StandingsRow {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}

fn query_rows(conn: &mut DbConn, sql: &str) -> rusqlite::Result<Vec<StandingsRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_standings_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
