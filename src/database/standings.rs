use anyhow::{Context, Result};
use rusqlite::Connection;

use super::models::{RankedPlayer, Standing};

pub fn list_standings(conn: &Connection) -> Result<Vec<Standing>> {
    let sql = "SELECT id, name, wins, matches FROM standings ORDER BY wins DESC, id ASC";

    let mut stmt = conn.prepare(sql).context("Failed to query standings")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Standing {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Players in standings order, as consumed by the pairing engine.
pub fn list_ranked_players(conn: &Connection) -> Result<Vec<RankedPlayer>> {
    let sql = "SELECT id, name FROM \"groups\"";

    let mut stmt = conn.prepare(sql).context("Failed to query ranked players")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RankedPlayer {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_memory_pool, get_connection, DbPool};
    use crate::database::matches::insert_match;
    use crate::database::players::insert_player;
    use crate::database::setup::ensure_schema;

    fn test_pool() -> DbPool {
        let pool = create_memory_pool().unwrap();
        ensure_schema(&get_connection(&pool).unwrap()).unwrap();
        pool
    }

    #[test]
    fn test_new_players_have_zero_record() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();
        insert_player(&conn, "Melpomene Murray").unwrap();
        insert_player(&conn, "Randy Schwartz").unwrap();

        let standings = list_standings(&conn).unwrap();

        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|s| s.wins == 0 && s.matches == 0));
    }

    #[test]
    fn test_winners_ranked_first() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();
        let a = insert_player(&conn, "A").unwrap();
        let b = insert_player(&conn, "B").unwrap();
        let c = insert_player(&conn, "C").unwrap();
        let d = insert_player(&conn, "D").unwrap();
        insert_match(&conn, b.id, a.id).unwrap();
        insert_match(&conn, d.id, c.id).unwrap();
        insert_match(&conn, d.id, b.id).unwrap();

        let standings = list_standings(&conn).unwrap();
        let order: Vec<i32> = standings.iter().map(|s| s.id).collect();

        assert_eq!(order, vec![d.id, b.id, a.id, c.id]);
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[0].matches, 2);
        assert_eq!(standings[1].wins, 1);
        assert_eq!(standings[1].matches, 2);
        assert_eq!(standings[3].matches, 1);
    }

    #[test]
    fn test_ranked_players_follow_standings() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();
        let a = insert_player(&conn, "A").unwrap();
        let b = insert_player(&conn, "B").unwrap();
        let c = insert_player(&conn, "C").unwrap();
        insert_match(&conn, c.id, a.id).unwrap();

        let ranked = list_ranked_players(&conn).unwrap();
        let standings = list_standings(&conn).unwrap();

        let ranked_ids: Vec<i32> = ranked.iter().map(|p| p.id).collect();
        let standing_ids: Vec<i32> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ranked_ids, standing_ids);
        assert_eq!(ranked_ids, vec![c.id, a.id, b.id]);
    }
}
