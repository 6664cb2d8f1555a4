use crate::models::Collection;
use crate::ui::messages::{info, success};
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied at most once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_collections",
        description: "Created collections table",
        apply: create_collections_table,
    },
    Migration {
        version: "20250110_0002_seed_collections",
        description: "Seeded empty snapshots for every collection",
        apply: seed_collection_rows,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger,
/// so it is created outside the versioned steps.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// One row per named collection; `payload` is the JSON array snapshot.
fn create_collections_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            name        TEXT PRIMARY KEY,
            payload     TEXT NOT NULL DEFAULT '[]',
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn seed_collection_rows(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO collections (name, payload, updated_at)
         VALUES (?1, '[]', datetime('now'))",
    )?;

    for c in Collection::ALL {
        stmt.execute([c.key()])?;
    }
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    Ok(())
}

/// Versions already recorded in the ledger, in application order.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Each step runs inside its own transaction
/// together with its ledger entry. Returns the `(version, description)`
/// of every step applied by this call; nothing is printed here.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<(&'static str, &'static str)>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let step = (m.apply)(conn).and_then(|_| mark_applied(conn, m));

        match step {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                applied.push((m.version, m.description));
            }
            Err(e) => {
                conn.execute_batch("ROLLBACK;").ok();
                return Err(e);
            }
        }
    }

    Ok(applied)
}

/// Report the steps returned by [`run_pending_migrations`].
pub fn print_applied(applied: &[(&str, &str)]) {
    if applied.is_empty() {
        info("No pending migrations.");
        return;
    }

    for (version, description) in applied {
        success(format!("Migration applied: {} → {}", version, description));
    }
}
