use log::info;

use super::connection::DbConn;
use crate::errors::{with_sql_context, Result};

/// Create the tables and the standings view if they are missing
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement, idx + 1)?;
    }

    info!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str, position: usize) -> Result<()> {
    let result = conn.execute(sql, []).map(|_| ());
    with_sql_context(result, &format!("execute schema statement {position}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements_skips_blanks() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n ;CREATE TABLE b (y);\n");

        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn test_bundled_schema_statements() {
        let statements = split_sql_statements(include_str!("schema.sql"));

        assert_eq!(statements.len(), 5);
        assert!(statements[4].starts_with("CREATE VIEW IF NOT EXISTS player_standings"));
    }
}
