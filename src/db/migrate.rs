//! Schema migrations. Each migration is applied once and recorded in the
//! `log` table (`operation = 'migration_applied'`, `target = version`).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(&str, &str, Migration)] = &[
    (
        "20240101_0001_create_work_days",
        "Created work_days table",
        create_work_days_table,
    ),
    (
        "20240101_0002_add_updated_at",
        "Added updated_at to work_days",
        add_updated_at_column,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
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
    )
}

fn create_work_days_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_days (
            day_key  INTEGER PRIMARY KEY,
            date     TEXT NOT NULL,
            slices   TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_work_days_date ON work_days(date);
        "#,
    )
}

fn work_days_has_column(conn: &Connection, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('work_days')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn add_updated_at_column(conn: &Connection) -> rusqlite::Result<()> {
    if work_days_has_column(conn, "updated_at")? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE work_days ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). A failing migration aborts the session.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(format!("log table: {e}")))?;

    for (version, message, migration) in MIGRATIONS {
        let applied =
            is_applied(conn, version).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        if applied {
            continue;
        }

        debug!("applying migration {version}");

        migration(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
    }

    Ok(())
}

/// Versions recorded as applied, in order.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
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
