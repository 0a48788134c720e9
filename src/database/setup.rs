use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_STATEMENTS: [&str; 4] = [
    "DROP VIEW IF EXISTS \"groups\"",
    "DROP VIEW IF EXISTS standings",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS players",
];

/// Drop every tournament table and view, then recreate them empty.
pub fn reset_database(conn: &Connection) -> Result<()> {
    for statement in DROP_STATEMENTS {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to drop schema object: {}", statement))?;
    }

    ensure_schema(conn)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

/// Create any missing tables and views, keeping existing data.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
