use anyhow::{Context, Result};
use rusqlite::Connection;

use super::connection::{get_connection, DbPool};

/// Run `operation` as one all-or-nothing unit of work.
///
/// A connection is checked out of the pool for the duration of the call and
/// handed back when it returns, on success and on failure alike. The
/// transaction commits when `operation` returns `Ok` and rolls back
/// otherwise; the operation's error is returned to the caller as is.
pub fn with_transaction<T, F>(pool: &DbPool, operation: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T>,
{
    let mut conn = get_connection(pool)?;
    let tx = conn
        .transaction()
        .context("Failed to begin transaction")?;

    let result = {
        let handle: &Connection = &tx;
        operation(handle)
    };

    match result {
        Ok(value) => {
            tx.commit().context("Failed to commit transaction")?;
            log::debug!("Transaction committed");
            Ok(value)
        }
        Err(e) => {
            log::warn!("Rolling back transaction: {e:#}");
            if let Err(rollback_err) = tx.rollback() {
                log::warn!("Rollback failed: {rollback_err}");
            }
            Err(e)
        }
    }
}
