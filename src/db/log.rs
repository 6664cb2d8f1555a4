use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal audit line into the `log` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as [`audit`], but a failure only produces a warning.
/// Mutations must never be rolled back because the audit trail failed.
pub fn audit_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(conn, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

/// Rows of the `log` table, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
