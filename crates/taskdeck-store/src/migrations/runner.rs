//! Migration runner
//!
//! Applies migrations with checksums, tamper detection, and idempotency

use crate::errors::{Result, StoreError};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the database
///
/// Already-applied migrations are skipped after their recorded checksum is
/// verified against the embedded SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(stored) = recorded {
        // Idempotent: already applied, but the SQL must not have changed
        if let Some(stored) = stored {
            if stored != checksum {
                return Err(StoreError::ChecksumMismatch {
                    id: migration_id.to_string(),
                    expected: stored,
                    actual: checksum,
                });
            }
        }
        return Ok(());
    }

    let tx = conn.transaction()?;

    tx.execute_batch(sql).map_err(|e| StoreError::Migration {
        id: migration_id.to_string(),
        reason: e.to_string(),
    })?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )?;

    tx.commit()?;

    tracing::debug!(migration_id, "migration applied");

    Ok(())
}
